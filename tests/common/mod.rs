//! Shared test fixtures for the card-prices integration tests.
//!
//! Provides a small sample dataset, helpers for writing dataset files
//! (plain and gzipped), a one-shot HTTP server for exercising the URL
//! loader, and a `RecordingSink` that captures render operations.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use card_prices::config::COLUMN_COUNT;
use card_prices::{CardRecord, TableSink};

pub fn card(name: &str, low: f64, mid: f64, high: f64, market: f64) -> CardRecord {
    CardRecord {
        name: name.to_string(),
        low,
        mid,
        high,
        market,
    }
}

/// Twelve cards with distinct prices per metric, enough to exercise the
/// top-10 truncation.
pub fn sample_cards() -> Vec<CardRecord> {
    (1..=12)
        .map(|i| {
            let i = i as f64;
            card(&format!("Card {i}"), i, 100.0 - i, i * 2.0, 50.0 + i)
        })
        .collect()
}

/// Write `cards` as a JSON dataset file inside `dir` and return its path.
pub fn write_dataset(dir: &tempfile::TempDir, cards: &[CardRecord]) -> std::path::PathBuf {
    let path = dir.path().join("cards_data.json");
    std::fs::write(&path, serde_json::to_string(cards).unwrap()).unwrap();
    path
}

/// Write `cards` as a gzipped JSON dataset file inside `dir`.
pub fn write_dataset_gz(dir: &tempfile::TempDir, cards: &[CardRecord]) -> std::path::PathBuf {
    let path = dir.path().join("cards_data.json.gz");
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    encoder
        .write_all(serde_json::to_string(cards).unwrap().as_bytes())
        .unwrap();
    encoder.finish().unwrap();
    path
}

/// Serve exactly one HTTP response on a local port and return the URL.
///
/// The server thread accepts a single connection, consumes the request head,
/// writes `status_line` + `body`, and exits.
pub fn serve_once(status_line: &str, body: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/cards_data.json")
}

// ---------------------------------------------------------------------------
// RecordingSink
// ---------------------------------------------------------------------------

/// A `TableSink` that records every operation for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub rows: Vec<[String; COLUMN_COUNT]>,
    pub error: Option<String>,
    pub clears: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered text of cell `cell` on row `row`, parsed back to a float.
    pub fn price_at(&self, row: usize, cell: usize) -> f64 {
        self.rows[row][cell].parse().unwrap()
    }
}

impl TableSink for RecordingSink {
    fn clear(&mut self) {
        self.rows.clear();
        self.clears += 1;
    }

    fn append_row(&mut self, cells: &[String; COLUMN_COUNT]) {
        self.rows.push(cells.clone());
    }

    fn error_row(&mut self, message: &str) {
        self.rows.clear();
        self.error = Some(message.to_string());
    }
}
