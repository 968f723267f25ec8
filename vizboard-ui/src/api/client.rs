//! HTTP Dataset Client
//!
//! The dashboard's only remote call: one GET of the dataset JSON.

use gloo_net::http::Request;
use vizboard::record::{Record, DEFAULT_DATA_URL};

/// Local storage key holding an alternative dataset URL
const DATA_URL_KEY: &str = "vizboard_data_url";

/// Get the dataset URL from local storage or use the published one
pub fn get_data_url() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(DATA_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_URL.to_string())
}

/// Fetch the whole dataset. No retry.
pub async fn fetch_records() -> Result<Vec<Record>, String> {
    let url = get_data_url();

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Unexpected status {} from {}", response.status(), url));
    }

    response
        .json::<Vec<Record>>()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
