//! Dataset access

pub mod client;

pub use client::{fetch_records, get_data_url};
