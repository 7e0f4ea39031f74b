//! Metric parsing and accessor tests.

mod common;

use card_prices::{CardPricesError, Metric};

#[test]
fn parses_all_metric_names() {
    assert_eq!("low".parse::<Metric>().unwrap(), Metric::Low);
    assert_eq!("mid".parse::<Metric>().unwrap(), Metric::Mid);
    assert_eq!("high".parse::<Metric>().unwrap(), Metric::High);
    assert_eq!("market".parse::<Metric>().unwrap(), Metric::Market);
}

#[test]
fn parsing_is_case_insensitive_and_trims() {
    assert_eq!("  Market ".parse::<Metric>().unwrap(), Metric::Market);
    assert_eq!("LOW".parse::<Metric>().unwrap(), Metric::Low);
}

#[test]
fn unknown_metric_is_rejected() {
    match "median".parse::<Metric>() {
        Err(CardPricesError::InvalidMetric(name)) => assert_eq!(name, "median"),
        other => panic!("expected InvalidMetric, got {other:?}"),
    }
}

#[test]
fn display_round_trips_through_from_str() {
    for metric in Metric::ALL {
        assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
    }
}

#[test]
fn value_of_reads_the_matching_field() {
    let card = common::card("Eevee", 1.5, 2.5, 3.5, 4.5);
    assert_eq!(Metric::Low.value_of(&card), 1.5);
    assert_eq!(Metric::Mid.value_of(&card), 2.5);
    assert_eq!(Metric::High.value_of(&card), 3.5);
    assert_eq!(Metric::Market.value_of(&card), 4.5);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Metric::Market).unwrap(), "\"market\"");
    assert_eq!(
        serde_json::from_str::<Metric>("\"high\"").unwrap(),
        Metric::High
    );
}
