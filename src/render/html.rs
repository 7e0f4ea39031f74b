//! HTML `<tbody>` sink.

use crate::config::COLUMN_COUNT;
use crate::render::TableSink;

// ---------------------------------------------------------------------------
// HtmlTableBody
// ---------------------------------------------------------------------------

/// Accumulates `<tr>` markup suitable for a six-column table body.
///
/// All cell text is HTML-escaped before insertion; card names come from an
/// external dataset and are treated as untrusted.
#[derive(Debug, Default)]
pub struct HtmlTableBody {
    out: String,
}

impl HtmlTableBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated markup (the inner HTML of the `<tbody>`).
    pub fn as_html(&self) -> &str {
        &self.out
    }

    pub fn into_html(self) -> String {
        self.out
    }
}

impl TableSink for HtmlTableBody {
    fn clear(&mut self) {
        self.out.clear();
    }

    fn append_row(&mut self, cells: &[String; COLUMN_COUNT]) {
        self.out.push_str("<tr>");
        for cell in cells {
            self.out.push_str("<td>");
            self.out.push_str(&escape_html(cell));
            self.out.push_str("</td>");
        }
        self.out.push_str("</tr>\n");
    }

    fn error_row(&mut self, message: &str) {
        self.out.clear();
        self.out.push_str("<tr><td colspan=\"");
        self.out.push_str(&COLUMN_COUNT.to_string());
        self.out.push_str("\">");
        self.out.push_str(&escape_html(message));
        self.out.push_str("</td></tr>\n");
    }
}

fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
