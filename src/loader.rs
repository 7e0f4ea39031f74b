//! Dataset retrieval and parsing.
//!
//! Loads the card dataset from an HTTP(S) URL or a local file and parses it
//! into `Vec<CardRecord>`. Gzipped local files (`.gz`) are decompressed
//! transparently. The loader makes exactly one attempt; there is no retry,
//! no caching, and no timeout beyond the configured HTTP request timeout.

use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::time::Duration;

use flate2::read::GzDecoder;
use reqwest::blocking::Client;

use crate::config;
use crate::error::{CardPricesError, Result};
use crate::models::CardRecord;

// ---------------------------------------------------------------------------
// DataSource
// ---------------------------------------------------------------------------

/// Where the card dataset lives.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// An HTTP or HTTPS URL fetched with a blocking client.
    Url(String),
    /// A local JSON (or gzipped JSON) file.
    File(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        DataSource::File(PathBuf::from(config::DEFAULT_DATA_FILE))
    }
}

// ---------------------------------------------------------------------------
// DatasetLoader
// ---------------------------------------------------------------------------

/// Fetches and parses the card dataset from its configured source.
pub struct DatasetLoader {
    source: DataSource,
    timeout: Duration,
    client: Option<Client>,
}

impl DatasetLoader {
    pub fn new(source: DataSource, timeout: Duration) -> Self {
        Self {
            source,
            timeout,
            client: None,
        }
    }

    /// Lazy HTTP client, created on first use.
    fn client(&mut self) -> &Client {
        if self.client.is_none() {
            self.client = Some(
                Client::builder()
                    .timeout(self.timeout)
                    .redirect(reqwest::redirect::Policy::limited(10))
                    .build()
                    .expect("failed to build HTTP client"),
            );
        }
        self.client.as_ref().unwrap()
    }

    /// Load and parse the dataset.
    ///
    /// Failure modes map onto the error taxonomy: transport failures become
    /// [`CardPricesError::Http`] (URL) or [`CardPricesError::Io`] (file),
    /// non-success responses become [`CardPricesError::Status`] carrying the
    /// status code, and malformed bodies become [`CardPricesError::Json`].
    /// An empty array is a successful load.
    pub fn load(&mut self) -> Result<Vec<CardRecord>> {
        match self.source.clone() {
            DataSource::Url(url) => self.load_url(&url),
            DataSource::File(path) => load_file(&path),
        }
    }

    fn load_url(&mut self, url: &str) -> Result<Vec<CardRecord>> {
        let client = self.client().clone();
        let resp = client.get(url).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(CardPricesError::Status(status));
        }
        let body = resp.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Read and parse a local dataset file (handles `.gz` transparently).
fn load_file(path: &Path) -> Result<Vec<CardRecord>> {
    let contents = if path.extension().and_then(|e| e.to_str()) == Some("gz") {
        let file = fs::File::open(path)?;
        let mut decoder = BufReader::new(GzDecoder::new(BufReader::new(file)));
        let mut contents = String::new();
        decoder.read_to_string(&mut contents)?;
        contents
    } else {
        fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&contents)?)
}
