use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardRecord — One entity per tradable card
// ---------------------------------------------------------------------------

/// A single card with its four price points.
///
/// `name` is a display identifier and is not guaranteed unique. Price fields
/// missing from the source document deserialize as `0.0` (presence checks
/// only, no further validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(default)]
    pub low: f64,
    #[serde(default)]
    pub mid: f64,
    #[serde(default)]
    pub high: f64,
    #[serde(default)]
    pub market: f64,
}
