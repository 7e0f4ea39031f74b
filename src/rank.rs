//! Ranking core: sort a copy of the dataset by a price metric, descending,
//! and keep the top entries.

use std::cmp::Ordering;

use crate::models::{CardRecord, Metric};

/// Return the top `top_n` cards by `metric`, highest first.
///
/// Sorts a copy; the input slice is never reordered. The sort is stable, so
/// cards tied on the chosen metric keep their relative order from the
/// dataset. Values that do not compare (NaN from a hand-edited dataset) are
/// treated as equal and likewise keep dataset order. Returns fewer than
/// `top_n` cards when the input is smaller.
pub fn top_cards(cards: &[CardRecord], metric: Metric, top_n: usize) -> Vec<CardRecord> {
    let mut sorted = cards.to_vec();
    sorted.sort_by(|a, b| {
        metric
            .value_of(b)
            .partial_cmp(&metric.value_of(a))
            .unwrap_or(Ordering::Equal)
    });
    sorted.truncate(top_n);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(name: &str, value: f64) -> CardRecord {
        CardRecord {
            name: name.to_string(),
            low: value,
            mid: value,
            high: value,
            market: value,
        }
    }

    #[test]
    fn input_slice_is_not_reordered() {
        let cards = vec![card("A", 1.0), card("B", 9.0), card("C", 5.0)];
        let _ = top_cards(&cards, Metric::Low, 10);
        assert_eq!(cards[0].name, "A");
        assert_eq!(cards[1].name, "B");
        assert_eq!(cards[2].name, "C");
    }

    #[test]
    fn ties_keep_dataset_order() {
        let cards = vec![card("first", 3.0), card("second", 3.0), card("third", 3.0)];
        let top = top_cards(&cards, Metric::Market, 10);
        let names: Vec<&str> = top.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn nan_values_do_not_panic() {
        let cards = vec![card("ok", 2.0), card("nan", f64::NAN), card("ok2", 5.0)];
        let top = top_cards(&cards, Metric::High, 10);
        assert_eq!(top.len(), 3);
    }
}
