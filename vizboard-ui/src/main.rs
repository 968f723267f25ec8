//! Vizboard Dashboard
//!
//! Report dataset dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Report cards with case-insensitive title search
//! - Country, sector, region and topic filters
//! - Pie, bar, line and donut charts of the filtered subset
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the dataset once with a single GET and does all
//! filtering and aggregation in the browser through the `vizboard` pipeline.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
