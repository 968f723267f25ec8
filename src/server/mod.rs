//! Static Dashboard Server
//!
//! Hosts the compiled browser dashboard, built with Axum. The server does
//! no data processing: the browser fetches the dataset itself and does all
//! filtering and aggregation client-side.
//!
//! # Endpoints
//!
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (bundle present)
//! - `GET /health` - Full health status
//! - `GET /*` - Files of the bundle directory, falling back to `index.html`
//!   so client-side routes such as `/dashboard` survive a reload
//!
//! # Example
//!
//! ```rust,ignore
//! use vizboard::config::ServerConfig;
//! use vizboard::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     serve(ServerState::new(ServerConfig::default())).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod health;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the router with health routes, the static bundle and middleware
pub fn build_router(state: ServerState) -> ServerResult<Router> {
    let static_dir = state.static_dir().clone();
    let index = static_dir.join("index.html");

    let health_routes = Router::new()
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        .route("/", get(health::full_health));

    let cors = cors_layer(&state.config.cors_origins)?;
    let shared_state = Arc::new(state);

    Ok(Router::new()
        .nest("/health", health_routes)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state))
}

fn cors_layer(origins: &[String]) -> ServerResult<CorsLayer> {
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let values = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin(origin.clone()))
        })
        .collect::<ServerResult<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(values))
        .allow_methods([Method::GET, Method::HEAD]))
}

/// Start the server and run until Ctrl+C / SIGTERM
pub async fn serve(state: ServerState) -> ServerResult<()> {
    let addr = state.config.addr();

    if !state.bundle_present() {
        tracing::warn!(
            dir = ?state.static_dir(),
            "Dashboard bundle not found, run `trunk build --release` in vizboard-ui/"
        );
    }

    let router = build_router(state)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Vizboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Vizboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const INDEX: &str = "<!DOCTYPE html><html><body>vizboard</body></html>";

    fn create_test_app(with_bundle: bool) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        if with_bundle {
            std::fs::write(dir.path().join("index.html"), INDEX).unwrap();
            std::fs::write(dir.path().join("app.js"), "console.log('app');").unwrap();
        }

        let config = ServerConfig {
            static_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let router = build_router(ServerState::new(config)).unwrap();

        (router, dir)
    }

    async fn get_path(app: Router, path: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8_lossy(&bytes).to_string())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(false);
        let (status, _) = get_path(app, "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_bundle() {
        let (app, _dir) = create_test_app(false);
        let (status, _) = get_path(app, "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let (app, _dir) = create_test_app(true);
        let (status, _) = get_path(app, "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get_path(app, "/health").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["bundle"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_serves_bundle_files() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get_path(app, "/app.js").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "console.log('app');");
    }

    #[tokio::test]
    async fn test_client_routes_fall_back_to_index() {
        let (app, _dir) = create_test_app(true);
        let (status, body) = get_path(app, "/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX);
    }

    #[test]
    fn test_invalid_cors_origin() {
        let result = cors_layer(&["bad\norigin".to_string()]);
        assert!(matches!(result, Err(ServerError::InvalidOrigin(_))));

        assert!(cors_layer(&["http://localhost:8084".to_string()]).is_ok());
    }
}
