//! Startup orchestration.
//!
//! # Responsibilities
//! - Apply the configured process-wide fallback
//! - Start the metrics exporter when enabled
//!
//! # Design Decisions
//! - Runs once, before the listener accepts traffic
//! - Fail fast: any startup error is fatal

use axum::http::StatusCode;
use thiserror::Error;

use crate::config::{FallbackConfig, ServerConfig};
use crate::observability::metrics;
use crate::routing::{fallback, StatusHandler};

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid fallback status {0}")]
    FallbackStatus(u16),

    #[error("invalid metrics address {0:?}")]
    MetricsAddress(String),

    #[error("failed to install metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),
}

/// Install the process-wide fallback described by `config`.
///
/// 405 restores the built-in handler; any other status installs a
/// [`StatusHandler`] for it.
pub fn apply_fallback(config: &FallbackConfig) -> Result<(), StartupError> {
    let status = StatusCode::from_u16(config.status)
        .map_err(|_| StartupError::FallbackStatus(config.status))?;

    if status == StatusCode::METHOD_NOT_ALLOWED {
        fallback::reset_default_handler();
    } else {
        fallback::set_default_handler(StatusHandler::new(status));
    }

    tracing::info!(status = status.as_u16(), "Process-wide fallback configured");
    Ok(())
}

/// Initialize subsystems in order. Call from within the Tokio runtime.
pub fn prepare(config: &ServerConfig) -> Result<(), StartupError> {
    apply_fallback(&config.fallback)?;

    if config.observability.metrics_enabled {
        let addr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::MetricsAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    Ok(())
}
