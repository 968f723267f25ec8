//! Filtering and Aggregation Pipeline
//!
//! Stateless transforms between the record snapshot and the renderers:
//!
//! - **filter**: `FilterSelection`, `filter`, `search`
//! - **aggregate**: `group_count`, `likelihood_series`, `distinct_values`
//! - **dashboard**: `DashboardView`, the six-chart composition
//!
//! # Data Flow
//!
//! ```text
//! Snapshot → filter(selection) → subset ─┬→ cards
//!                                         └→ group_count / likelihood_series → charts
//! ```
//!
//! Everything here is synchronous and total, and compiles for the browser
//! dashboard as well as the native binaries.
//!
//! # Example
//!
//! ```rust
//! use vizboard::pipeline::{filter, group_count, FilterSelection};
//! use vizboard::record::{Field, Record};
//!
//! let records = vec![
//!     Record::new().with(Field::Country, "USA").with(Field::Sector, "Energy"),
//!     Record::new().with(Field::Country, "USA").with(Field::Sector, "Health"),
//!     Record::new().with(Field::Country, "UK").with(Field::Sector, "Energy"),
//! ];
//!
//! let usa = filter(&records, &FilterSelection::new().with(Field::Country, "USA"));
//! let sectors = group_count(usa, Field::Sector);
//!
//! assert_eq!(sectors[0].key, "Energy");
//! assert_eq!(sectors[1].key, "Health");
//! ```

pub mod aggregate;
pub mod dashboard;
pub mod filter;

pub use aggregate::{distinct_values, group_count, likelihood_series, GroupedCount, SeriesPoint, MISSING_KEY};
pub use dashboard::{palette_color, ChartData, ChartKind, ChartSpec, DashboardView, FilterOptions, PALETTE};
pub use filter::{filter, search, FilterSelection};
