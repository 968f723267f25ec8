//! Record Store
//!
//! Holds the full, unfiltered dataset for the lifetime of a session.
//!
//! - **source**: `DataSource` trait with HTTP and file implementations
//! - **error**: `FetchError`
//!
//! The store is built exactly once from the outcome of a single fetch and
//! is read-only afterwards. A failed fetch is logged and yields an empty
//! store; it is never retried and never surfaces as an error to callers.
//!
//! # Example
//!
//! ```rust,no_run
//! use vizboard::pipeline::FilterSelection;
//! use vizboard::record::Field;
//! use vizboard::store::{HttpSource, RecordStore, DEFAULT_DATA_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpSource::new(DEFAULT_DATA_URL, None)?;
//!     let store = RecordStore::load(&source).await;
//!
//!     let view = store.view(&FilterSelection::new().with(Field::Country, "India"));
//!     println!("{} of {} records match", view.matched, view.total);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod source;

pub use error::{FetchError, FetchResult};
pub use source::{decode_records, DataSource, FileSource, HttpSource, DEFAULT_DATA_URL};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

use crate::pipeline::{self, DashboardView, FilterOptions, FilterSelection};
use crate::record::Record;

/// How the snapshot was obtained
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadOutcome {
    /// Fetch succeeded
    Loaded { count: usize },
    /// Fetch failed; the store is empty
    Failed { reason: String },
}

/// Immutable snapshot of the dataset
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Arc<[Record]>,
    source: String,
    outcome: LoadOutcome,
    loaded_at: DateTime<Utc>,
}

impl RecordStore {
    /// Fetch once from `source`. Never fails: errors leave the store empty.
    pub async fn load(source: &dyn DataSource) -> Self {
        let origin = source.describe();
        let started = Instant::now();

        tracing::info!(source = %origin, "Fetching dataset");

        match source.fetch().await {
            Ok(records) => {
                tracing::info!(
                    source = %origin,
                    records = records.len(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Dataset loaded"
                );
                Self::from_records(origin, records)
            }
            Err(e) => {
                tracing::error!(
                    source = %origin,
                    error = %e,
                    "Failed to fetch dataset, continuing with an empty store"
                );
                Self {
                    records: Arc::from(Vec::new()),
                    source: origin,
                    outcome: LoadOutcome::Failed {
                        reason: e.to_string(),
                    },
                    loaded_at: Utc::now(),
                }
            }
        }
    }

    /// Wrap an already decoded collection
    pub fn from_records(source: impl Into<String>, records: Vec<Record>) -> Self {
        let count = records.len();
        Self {
            records: Arc::from(records),
            source: source.into(),
            outcome: LoadOutcome::Loaded { count },
            loaded_at: Utc::now(),
        }
    }

    /// The full collection, in dataset order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Shared handle to the snapshot; no records are copied
    pub fn shared(&self) -> Arc<[Record]> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn outcome(&self) -> &LoadOutcome {
        &self.outcome
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    /// Records matching `selection`
    pub fn filtered(&self, selection: &FilterSelection) -> Vec<&Record> {
        pipeline::filter(self.records(), selection)
    }

    /// Title search over the full collection
    pub fn search(&self, query: &str) -> Vec<&Record> {
        pipeline::search(self.records(), query)
    }

    /// Dashboard charts for `selection`
    pub fn view(&self, selection: &FilterSelection) -> DashboardView {
        DashboardView::build(self.records(), selection)
    }

    /// Option lists of the filter selects
    pub fn options(&self) -> FilterOptions {
        FilterOptions::from_records(self.records())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;
    use async_trait::async_trait;

    struct FailingSource;

    #[async_trait]
    impl DataSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self) -> FetchResult<Vec<Record>> {
            Err(FetchError::Status {
                status: 500,
                url: "failing".to_string(),
            })
        }
    }

    struct FixedSource(Vec<Record>);

    #[async_trait]
    impl DataSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        async fn fetch(&self) -> FetchResult<Vec<Record>> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_failed_fetch_leaves_store_empty() {
        let store = RecordStore::load(&FailingSource).await;

        assert!(store.is_empty());
        assert!(matches!(store.outcome(), LoadOutcome::Failed { .. }));

        let selection = FilterSelection::new().with(Field::Country, "USA");
        assert!(store.filtered(&selection).is_empty());
        assert!(store.search("").is_empty());

        let view = store.view(&selection);
        assert_eq!(view.matched, 0);
        assert!(view.charts.iter().all(|c| c.data.is_empty()));
    }

    #[tokio::test]
    async fn test_unreachable_url_leaves_store_empty() {
        // Port 1 is never listening on loopback in the test environment
        let source = HttpSource::new("http://127.0.0.1:1/data.json", None).unwrap();
        let store = RecordStore::load(&source).await;

        assert!(store.is_empty());
        assert_eq!(store.source(), "http://127.0.0.1:1/data.json");
    }

    #[tokio::test]
    async fn test_successful_load() {
        let records = vec![
            Record::new().titled("a").with(Field::Country, "USA"),
            Record::new().titled("b").with(Field::Country, "UK"),
        ];
        let store = RecordStore::load(&FixedSource(records)).await;

        assert_eq!(store.len(), 2);
        assert_eq!(store.outcome(), &LoadOutcome::Loaded { count: 2 });
        assert_eq!(store.options().country, vec!["USA", "UK"]);
        assert_eq!(store.search("B").len(), 1);
    }

    #[test]
    fn test_shared_handle_points_at_same_snapshot() {
        let store = RecordStore::from_records("memory", vec![Record::new()]);
        let shared = store.shared();
        assert!(std::ptr::eq(shared.as_ptr(), store.records().as_ptr()));
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(LoadOutcome::Loaded { count: 3 }).unwrap();
        assert_eq!(json["status"], "loaded");
        assert_eq!(json["count"], 3);
    }
}
