use std::time::Duration;

/// Relative location of the card dataset when no source is configured.
pub const DEFAULT_DATA_FILE: &str = "cards_data.json";

/// Number of rows a rendered table is truncated to.
pub const TOP_N: usize = 10;

/// Cells per rendered row: rank, name, and the four price points.
pub const COLUMN_COUNT: usize = 6;

pub const COLUMN_HEADERS: [&str; COLUMN_COUNT] = ["Rank", "Name", "Low", "Mid", "High", "Market"];

/// Fixed user-visible text shown in place of the table on a fatal load failure.
pub const LOAD_FAILURE_MESSAGE: &str = "Error loading card data.";

/// Fixed prefix for load-failure diagnostics on stderr.
pub const LOG_PREFIX: &str = "Failed to load or parse card data";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
