//! Metrics collection and exposition.
//!
//! # Metrics
//! - `mux_dispatch_total` (counter): dispatches by method and outcome
//!
//! # Design Decisions
//! - Recorded by the tower adapter, never inside `MethodRouter::dispatch`
//! - Without an installed recorder every update is a no-op
//! - Label values are static strings; extension methods collapse to "other"

use std::net::SocketAddr;

use axum::http::Method;
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

use crate::routing::{MethodSlot, Outcome};

pub const DISPATCH_TOTAL: &str = "mux_dispatch_total";

/// Install the Prometheus recorder with its own HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Count one dispatch.
pub fn record_dispatch(method: &Method, outcome: Outcome) {
    ::metrics::counter!(
        DISPATCH_TOTAL,
        "method" => method_label(method),
        "outcome" => outcome.as_str()
    )
    .increment(1);
}

fn method_label(method: &Method) -> &'static str {
    MethodSlot::from_method(method)
        .map(MethodSlot::as_str)
        .unwrap_or("other")
}
