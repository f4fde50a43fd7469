//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! The tower adapter and server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (dispatch counters)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through the trace layer's spans
//! - Metrics are cheap (atomic increments)
//! - Metrics exporter is opt-in

pub mod logging;
pub mod metrics;
