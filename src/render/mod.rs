//! Rendering targets for the ranked card table.
//!
//! The sorting/ranking/formatting logic talks to a small [`TableSink`] trait
//! rather than a live UI tree, so it can be exercised against fixtures. Two
//! sinks ship with the crate: [`html::HtmlTableBody`] producing `<tbody>`
//! markup, and [`text::TextTable`] producing the fixed-width console table.

pub mod html;
pub mod text;

pub use html::HtmlTableBody;
pub use text::TextTable;

use crate::config::COLUMN_COUNT;
use crate::models::CardRecord;

// ---------------------------------------------------------------------------
// TableSink
// ---------------------------------------------------------------------------

/// A rendering target: something that can clear itself and take rows.
pub trait TableSink {
    /// Drop all previously rendered rows.
    fn clear(&mut self);

    /// Append one data row of [`COLUMN_COUNT`] cells:
    /// rank, name, low, mid, high, market.
    fn append_row(&mut self, cells: &[String; COLUMN_COUNT]);

    /// Replace the contents with a single row spanning all columns,
    /// carrying a human-readable error message.
    fn error_row(&mut self, message: &str);
}

/// Build the cells for one rendered row.
///
/// `rank` is 1-based. Prices are formatted with exactly two digits after the
/// decimal point regardless of source precision.
pub fn row_cells(rank: usize, card: &CardRecord) -> [String; COLUMN_COUNT] {
    [
        rank.to_string(),
        card.name.clone(),
        format!("{:.2}", card.low),
        format!("{:.2}", card.mid),
        format!("{:.2}", card.high),
        format!("{:.2}", card.market),
    ]
}
