//! Async wrapper around [`CardTable`] for use in async runtimes (Tokio, etc.).
//!
//! The dataset fetch uses a blocking HTTP client, so both initialization and
//! renders are dispatched to the blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//!
//! # Example
//!
//! ```no_run
//! use card_prices::{AsyncCardTable, Metric};
//!
//! async fn top_by_market() -> card_prices::Result<()> {
//!     let table = AsyncCardTable::builder()
//!         .url("https://example.com/cards_data.json")
//!         .load()
//!         .await?;
//!
//!     let top = table.top_cards(Metric::Market).await?;
//!     println!("{} cards", top.len());
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::error::{CardPricesError, Result};
use crate::models::{CardRecord, Metric};
use crate::{CardTable, CardTableBuilder};

// ---------------------------------------------------------------------------
// AsyncCardTableBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncCardTable`].
#[derive(Default)]
pub struct AsyncCardTableBuilder {
    path: Option<PathBuf>,
    url: Option<String>,
    top_n: Option<usize>,
    timeout: Option<Duration>,
}

impl AsyncCardTableBuilder {
    /// Load the dataset from an HTTP(S) URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self.path = None;
        self
    }

    /// Load the dataset from a local file.
    pub fn file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self.url = None;
        self
    }

    /// Cap rendered tables at `top_n` rows.
    pub fn top_n(mut self, top_n: usize) -> Self {
        self.top_n = Some(top_n);
        self
    }

    /// Set the HTTP request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn into_sync(self) -> CardTableBuilder {
        let mut builder = CardTable::builder();
        if let Some(url) = self.url {
            builder = builder.url(url);
        } else if let Some(path) = self.path {
            builder = builder.file(path);
        }
        if let Some(top_n) = self.top_n {
            builder = builder.top_n(top_n);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }

    /// Load the dataset on the blocking thread pool and build the table.
    pub async fn load(self) -> Result<AsyncCardTable> {
        let builder = self.into_sync();
        tokio::task::spawn_blocking(move || {
            let table = builder.load()?;
            Ok(AsyncCardTable {
                inner: Arc::new(Mutex::new(table)),
            })
        })
        .await
        .map_err(|e| CardPricesError::Task(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncCardTable
// ---------------------------------------------------------------------------

/// Async wrapper around [`CardTable`].
///
/// All operations run on the blocking thread pool via
/// [`tokio::task::spawn_blocking`]; the table itself is shared behind an
/// `Arc<Mutex<_>>` so the wrapper is cheap to clone into tasks.
#[derive(Clone)]
pub struct AsyncCardTable {
    inner: Arc<Mutex<CardTable>>,
}

impl AsyncCardTable {
    /// Create a new builder for configuring the async table.
    pub fn builder() -> AsyncCardTableBuilder {
        AsyncCardTableBuilder::default()
    }

    /// Run a sync table operation on the blocking thread pool.
    ///
    /// The closure receives a `&CardTable` reference and should return a
    /// `Result<T>`.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&CardTable) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let table = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = table
                .lock()
                .map_err(|_| CardPricesError::Task("table lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| CardPricesError::Task(format!("Task join error: {e}")))?
    }

    /// The top cards by `metric`, asynchronously.
    ///
    /// Convenience wrapper around [`run()`](Self::run) for
    /// [`CardTable::top_cards()`].
    pub async fn top_cards(&self, metric: Metric) -> Result<Vec<CardRecord>> {
        self.run(move |t| Ok(t.top_cards(metric))).await
    }
}
