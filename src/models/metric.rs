use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CardPricesError;
use crate::models::card::CardRecord;

// ---------------------------------------------------------------------------
// Metric — The sortable price fields
// ---------------------------------------------------------------------------

/// One of the four numeric price fields used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Low,
    Mid,
    High,
    Market,
}

impl Metric {
    /// All metrics, in display order.
    pub const ALL: [Metric; 4] = [Metric::Low, Metric::Mid, Metric::High, Metric::Market];

    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::Low => "low",
            Metric::Mid => "mid",
            Metric::High => "high",
            Metric::Market => "market",
        }
    }

    /// Read this metric's price point from a card.
    pub fn value_of(&self, card: &CardRecord) -> f64 {
        match self {
            Metric::Low => card.low,
            Metric::Mid => card.mid,
            Metric::High => card.high,
            Metric::Market => card.market,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = CardPricesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Metric::Low),
            "mid" => Ok(Metric::Mid),
            "high" => Ok(Metric::High),
            "market" => Ok(Metric::Market),
            other => Err(CardPricesError::InvalidMetric(other.to_string())),
        }
    }
}
