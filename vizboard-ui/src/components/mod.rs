//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod filter_bar;
pub mod loading;
pub mod nav;
pub mod record_card;

pub use chart::ChartCard;
pub use filter_bar::FilterBar;
pub use loading::{CardSkeleton, ChartSkeleton};
pub use nav::Nav;
pub use record_card::RecordCard;
