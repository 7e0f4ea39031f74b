//! Trading-card price table renderer.
//!
//! Loads a JSON dataset of card price points, ranks the records by a chosen
//! price metric (low, mid, high, market), and renders the top 10 into a
//! pluggable table sink (HTML table body or fixed-width console table).
//!
//! The dataset is loaded once and held by the [`CardTable`]; every render
//! re-sorts a copy of the cached data, so switching metrics never re-fetches.
//!
//! # Quick start
//!
//! ```no_run
//! use card_prices::{CardTable, HtmlTableBody, Metric};
//!
//! let mut body = HtmlTableBody::new();
//! let table = CardTable::builder()
//!     .url("https://example.com/cards_data.json")
//!     .initialize(Metric::Market, &mut body);
//!
//! if let Some(table) = table {
//!     // Re-render from the cached dataset on a new selection.
//!     table.render(Metric::Low, &mut body);
//! }
//! println!("{}", body.as_html());
//! ```

#[cfg(feature = "async")]
pub mod async_table;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod rank;
pub mod render;

#[cfg(feature = "async")]
pub use async_table::AsyncCardTable;
pub use error::{CardPricesError, Result};
pub use loader::{DataSource, DatasetLoader};
pub use models::{CardRecord, Metric};
pub use render::{HtmlTableBody, TableSink, TextTable};

use std::fmt;
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// CardTableBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`CardTable`].
///
/// Use [`CardTable::builder()`] to obtain one, point it at a dataset source,
/// and call either [`load()`](CardTableBuilder::load) for a plain `Result`,
/// or [`initialize()`](CardTableBuilder::initialize) for the full
/// load-render-or-report sequence.
pub struct CardTableBuilder {
    source: DataSource,
    top_n: usize,
    timeout: Duration,
}

impl Default for CardTableBuilder {
    fn default() -> Self {
        Self {
            source: DataSource::default(),
            top_n: config::TOP_N,
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl CardTableBuilder {
    /// Load the dataset from an HTTP(S) URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.source = DataSource::Url(url.into());
        self
    }

    /// Load the dataset from a local file (`.gz` handled transparently).
    ///
    /// The default source is the relative file `cards_data.json`.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = DataSource::File(path.as_ref().to_path_buf());
        self
    }

    /// Cap rendered tables at `top_n` rows. Defaults to 10.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set the HTTP request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load the dataset and build the table state.
    ///
    /// An empty dataset is a successful load; rendering it is a no-op.
    pub fn load(self) -> Result<CardTable> {
        let mut loader = DatasetLoader::new(self.source, self.timeout);
        let dataset = loader.load()?;
        Ok(CardTable {
            dataset,
            top_n: self.top_n,
        })
    }

    /// Run the full initialization sequence against a sink.
    ///
    /// On success: builds the table, renders the initial view for `metric`,
    /// and returns `Some(table)` for subsequent re-renders. On any load
    /// failure: logs the error to stderr, replaces the sink contents with a
    /// single full-width error row, and returns `None`. The failure is
    /// terminal; there is no retry path.
    pub fn initialize(self, metric: Metric, sink: &mut dyn TableSink) -> Option<CardTable> {
        match self.load() {
            Ok(table) => {
                table.render(metric, sink);
                Some(table)
            }
            Err(err) => {
                eprintln!("{}: {}", config::LOG_PREFIX, err);
                sink.error_row(config::LOAD_FAILURE_MESSAGE);
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// CardTable
// ---------------------------------------------------------------------------

/// The loaded card dataset plus the render operation.
///
/// Holds the dataset for its whole lifetime; it is written once at load and
/// only ever read afterwards. Created via [`CardTable::builder()`], or
/// [`CardTable::with_dataset()`] for tests and embedders that already hold
/// records.
pub struct CardTable {
    dataset: Vec<CardRecord>,
    top_n: usize,
}

impl CardTable {
    /// Create a new builder for configuring the table.
    pub fn builder() -> CardTableBuilder {
        CardTableBuilder::default()
    }

    /// Build table state directly from records already in memory.
    pub fn with_dataset(dataset: Vec<CardRecord>) -> Self {
        Self {
            dataset,
            top_n: config::TOP_N,
        }
    }

    /// The cached dataset, in load order.
    pub fn dataset(&self) -> &[CardRecord] {
        &self.dataset
    }

    /// The top cards by `metric`, highest first, capped at the configured
    /// row limit. Ties keep dataset order (stable sort).
    pub fn top_cards(&self, metric: Metric) -> Vec<CardRecord> {
        rank::top_cards(&self.dataset, metric, self.top_n)
    }

    /// Render the ranked view for `metric` into `sink`.
    ///
    /// Clears the sink and appends one row per surviving record: rank, name,
    /// and the four price points formatted to two decimal places. If the
    /// cached dataset is empty this is a no-op and the sink is left as is.
    /// May be invoked arbitrarily many times; each call fully replaces the
    /// previous rows.
    pub fn render(&self, metric: Metric, sink: &mut dyn TableSink) {
        if self.dataset.is_empty() {
            return;
        }
        sink.clear();
        for (index, card) in self.top_cards(metric).iter().enumerate() {
            sink.append_row(&render::row_cells(index + 1, card));
        }
    }
}

impl fmt::Display for CardTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CardTable(records={}, top_n={})",
            self.dataset.len(),
            self.top_n
        )
    }
}
