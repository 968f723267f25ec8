//! Server State
//!
//! Shared state accessible by the health handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Directory of the compiled dashboard
    pub fn static_dir(&self) -> &PathBuf {
        &self.config.static_dir
    }

    /// True when the bundle directory holds an `index.html`
    pub fn bundle_present(&self) -> bool {
        self.static_dir().join("index.html").is_file()
    }
}
