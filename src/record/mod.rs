//! Report Records
//!
//! The atomic entity of the dashboard dataset and the selector used to
//! address its categorical attributes:
//!
//! - **types**: `Record`, decoded leniently from the published JSON
//! - **field**: `Field`, the grouping/filtering dimension selector
//!
//! Records are read-only once decoded. Nothing in this crate creates,
//! mutates or deletes them; the pipeline only borrows.

pub mod field;
pub mod types;

pub use field::{Field, ParseFieldError};
pub use types::Record;

/// Published location of the report dataset
pub const DEFAULT_DATA_URL: &str = "https://ansh12500.github.io/jsondataapi/data.json";
