//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, middleware)
//!     → request.rs (request ID)
//!     → service.rs (collect body, build ResponseSink)
//!     → routing::MethodRouter::dispatch
//!     → sink.rs (status, headers, body → response)
//!     → Send to client
//! ```

pub mod request;
pub mod server;
pub mod service;
pub mod sink;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
pub use sink::ResponseSink;
