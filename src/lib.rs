//! Method-based request dispatch for axum/tower services.
//!
//! A [`MethodRouter`] maps each of the nine HTTP verbs to an optional handler,
//! falls back to a per-table handler on a miss, and otherwise to a
//! process-wide default (405 Method Not Allowed). HEAD is served by GET when
//! no HEAD handler is set.

// Core
pub mod routing;

// Transport integration
pub mod http;

// Cross-cutting concerns
pub mod config;
pub mod lifecycle;
pub mod observability;

pub use config::ServerConfig;
pub use http::{HttpServer, ResponseSink};
pub use lifecycle::{Shutdown, ShutdownListener};
pub use routing::{handler_fn, Handler, HandlerRef, MethodRouter, MethodSlot, StatusHandler};
