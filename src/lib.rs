//! # Vizboard
//!
//! Report Dashboard - fetch a categorized report dataset once, filter it
//! client-side and chart the filtered subset.
//!
//! ## Features
//!
//! - **Exact-match filters**: country, sector, region and topic selects
//! - **Title search**: case-insensitive substring search over the full dataset
//! - **Charts**: grouped counts for pie, donut and bar charts plus the
//!   likelihood line series, in first-occurrence order
//! - **Browser dashboard**: Leptos WASM frontend in `vizboard-ui/`
//! - **Terminal front end**: `vizboard-cli` renders the same charts as text
//!
//! ## Modules
//!
//! - [`record`]: The report record and the field selector
//! - [`pipeline`]: Filter Engine, Aggregator and dashboard composition
//! - `store`: One-shot dataset fetch into an immutable snapshot (native)
//! - `config`: TOML configuration with environment overrides (native)
//! - `server`: Static server for the compiled dashboard (native)
//! - `export`: CSV writers (native)
//!
//! Only `record` and `pipeline` are compiled without the `native` feature,
//! which is how the browser dashboard depends on this crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vizboard::pipeline::FilterSelection;
//! use vizboard::record::Field;
//! use vizboard::store::{HttpSource, RecordStore, DEFAULT_DATA_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Fetch once; a failure leaves the store empty
//!     let store = RecordStore::load(&HttpSource::new(DEFAULT_DATA_URL, None)?).await;
//!
//!     // Filter and aggregate
//!     let selection = FilterSelection::new().with(Field::Sector, "Energy");
//!     let view = store.view(&selection);
//!
//!     for chart in &view.charts {
//!         println!("{}: {} segments", chart.title, chart.data.len());
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod pipeline;
pub mod record;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod export;
#[cfg(feature = "native")]
pub mod logging;
#[cfg(feature = "native")]
pub mod server;
#[cfg(feature = "native")]
pub mod store;

// Re-export top-level types for convenience
pub use pipeline::{
    filter, group_count, likelihood_series, search, ChartData, ChartKind, ChartSpec,
    DashboardView, FilterOptions, FilterSelection, GroupedCount, SeriesPoint,
};

pub use record::{Field, Record};

#[cfg(feature = "native")]
pub use store::{DataSource, FetchError, FileSource, HttpSource, LoadOutcome, RecordStore};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, LoggingConfig, ServerConfig, SourceConfig};

#[cfg(feature = "native")]
pub use server::{build_router, serve, ServerError, ServerState};
