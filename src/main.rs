//! method-mux demo server
//!
//! Serves four example dispatch tables over HTTP.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ axum Router (path) ──▶ MethodRouter (method) ──▶ Handler
//!                         │                        │
//!                         │                        ├─ HEAD without handler → GET
//!                         │                        ├─ miss → table fallback
//!                         │                        └─ miss → process-wide fallback (405)
//!                         │
//!                    tower-http layers: request ID, trace, timeout, body limit
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use method_mux::config::{load_config, validation::validate_config, ServerConfig};
use method_mux::lifecycle::{startup, Shutdown};
use method_mux::observability::logging::init_logging;
use method_mux::HttpServer;

#[derive(Parser)]
#[command(name = "method-mux")]
#[command(about = "Demo server for method-based dispatch tables", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(method_mux::config::ConfigError::Validation)?;
    }

    init_logging(&config.observability);

    tracing::info!("method-mux v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        fallback_status = config.fallback.status,
        "Configuration loaded"
    );

    startup::prepare(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.listener()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
