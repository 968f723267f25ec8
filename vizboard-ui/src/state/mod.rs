//! State Management
//!
//! The only mutable state of the dashboard lives here.

pub mod global;

pub use global::{load_dataset, provide_global_state, GlobalState, LoadStatus};
