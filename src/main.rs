//! Vizboard Server
//!
//! Hosts the compiled browser dashboard.
//!
//! Run with: cargo run --bin vizboard
//!
//! # Configuration
//!
//! Read from `--config`, else the default locations (see `vizboard-cli config`),
//! then overridden by `VIZBOARD_*` environment variables and finally by the
//! command-line flags below. `RUST_LOG` overrides the configured log level.

use clap::Parser;
use std::path::PathBuf;
use vizboard::config::Config;
use vizboard::server::{serve, ServerState};

#[derive(Parser)]
#[command(name = "vizboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the report dashboard")]
struct Args {
    /// Config file (default: search the standard locations)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory holding the compiled dashboard
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(dir) = args.static_dir {
        config.server.static_dir = dir;
    }

    vizboard::logging::init(&config.logging);

    tracing::info!("Starting Vizboard v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Bundle directory: {:?}", config.server.static_dir);

    serve(ServerState::new(config.server)).await?;

    tracing::info!("Vizboard stopped");
    Ok(())
}
