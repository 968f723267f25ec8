//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (dashboard bundle is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use super::state::ServerState;

/// Full health response body
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub bundle: String,
    pub uptime_seconds: u64,
    pub version: String,
}

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 503 until the compiled dashboard is in place, since every page request
/// would otherwise 404.
pub async fn readiness(State(state): State<Arc<ServerState>>) -> StatusCode {
    if state.bundle_present() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}

/// GET /health
pub async fn full_health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    let bundle_ok = state.bundle_present();

    Json(HealthResponse {
        status: if bundle_ok { "healthy" } else { "degraded" }.to_string(),
        bundle: if bundle_ok { "ok" } else { "missing" }.to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
