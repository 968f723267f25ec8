//! Logging setup
//!
//! One `tracing` subscriber per process. `RUST_LOG` wins over the configured
//! level; `format = "json"` switches to structured output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directive for the configured level, scoped to this crate's targets
pub fn default_directive(config: &LoggingConfig) -> String {
    format!(
        "vizboard={level},vizboard_cli={level},tower_http=info",
        level = config.level
    )
}

/// Install the global subscriber. Calling it twice is a no-op.
pub fn init(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.format.eq_ignore_ascii_case("json") {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
