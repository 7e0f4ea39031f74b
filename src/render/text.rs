//! Fixed-width console table sink.

use std::fmt::Write as _;

use crate::config::{COLUMN_COUNT, COLUMN_HEADERS};
use crate::render::TableSink;

const NAME_WIDTH: usize = 15;
const PRICE_WIDTH: usize = 10;
const RANK_WIDTH: usize = 5;
const RULE_WIDTH: usize = 60;

// ---------------------------------------------------------------------------
// TextTable
// ---------------------------------------------------------------------------

/// Renders rows as an aligned plain-text table with a header and dashed rule.
///
/// `clear()` resets the buffer and re-emits the header, so after any render
/// pass the buffer holds exactly one complete table.
#[derive(Debug, Default)]
pub struct TextTable {
    out: String,
}

impl TextTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_text(&self) -> &str {
        &self.out
    }

    fn write_header(&mut self) {
        let [rank, name, low, mid, high, market] = COLUMN_HEADERS;
        let _ = writeln!(
            self.out,
            "{rank:<RANK_WIDTH$}{name:<NAME_WIDTH$}{low:>PRICE_WIDTH$}{mid:>PRICE_WIDTH$}{high:>PRICE_WIDTH$}{market:>PRICE_WIDTH$}"
        );
        let _ = writeln!(self.out, "{}", "-".repeat(RULE_WIDTH));
    }
}

impl TableSink for TextTable {
    fn clear(&mut self) {
        self.out.clear();
        self.write_header();
    }

    fn append_row(&mut self, cells: &[String; COLUMN_COUNT]) {
        let [rank, name, low, mid, high, market] = cells;
        let _ = writeln!(
            self.out,
            "{rank:<RANK_WIDTH$}{name:<NAME_WIDTH$}{low:>PRICE_WIDTH$}{mid:>PRICE_WIDTH$}{high:>PRICE_WIDTH$}{market:>PRICE_WIDTH$}"
        );
    }

    fn error_row(&mut self, message: &str) {
        self.out.clear();
        self.out.push_str(message);
        self.out.push('\n');
    }
}
