//! Method-based dispatch.
//!
//! # Data Flow
//! ```text
//! Incoming request (method, collected body)
//!     → table.rs (slot lookup, HEAD → GET)
//!     → hit: slot handler
//!     → miss: table fallback, else fallback.rs (process-wide default, 405)
//!
//! Table construction (at startup):
//!     get(h1).post(h2).fallback(h3)
//!     → one MethodRouter, order of calls irrelevant
//!     → registered against a path by the host router
//! ```
//!
//! # Design Decisions
//! - Dispatch looks at the method only; paths belong to the host router
//! - Tables are plain values, immutable once registered
//! - Every request ends in exactly one handler call; there is no error path

pub mod fallback;
pub mod handler;
pub mod method;
pub mod table;

pub use fallback::{
    default_handler, method_not_allowed, reset_default_handler, set_default_handler,
    set_default_handler_ref, MethodNotAllowed,
};
pub use handler::{handler_fn, DispatchRequest, Handler, HandlerFn, HandlerRef, StatusHandler};
pub use method::{MethodSlot, UnknownMethod};
pub use table::{
    connect, delete, fallback, get, head, options, patch, post, put, trace, MethodRouter, Outcome,
};
