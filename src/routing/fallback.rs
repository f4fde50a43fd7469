//! Process-wide fallback for dispatch misses.
//!
//! # Responsibilities
//! - Hold the handler used when a table misses and has no fallback of its own
//! - Provide the built-in 405 Method Not Allowed handler
//!
//! # Design Decisions
//! - Starts as [`MethodNotAllowed`]; reassigned only through the setters here
//! - Stored in an `ArcSwap`, so the dispatch path reads it without a lock
//! - Reassign during startup, before the listener accepts traffic

use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;
use axum::http::StatusCode;

use crate::http::ResponseSink;
use crate::routing::handler::{DispatchRequest, Handler, HandlerRef};

/// Built-in handler answering 405 Method Not Allowed with an empty body.
#[derive(Debug, Clone, Copy, Default)]
pub struct MethodNotAllowed;

impl Handler for MethodNotAllowed {
    fn serve(&self, sink: &mut ResponseSink, _req: &DispatchRequest) {
        sink.set_status(StatusCode::METHOD_NOT_ALLOWED);
    }
}

static METHOD_NOT_ALLOWED: LazyLock<HandlerRef> = LazyLock::new(|| Arc::new(MethodNotAllowed) as HandlerRef);

static DEFAULT_HANDLER: LazyLock<ArcSwap<HandlerRef>> =
    LazyLock::new(|| ArcSwap::from_pointee(method_not_allowed()));

/// Shared reference to the built-in [`MethodNotAllowed`] handler.
pub fn method_not_allowed() -> HandlerRef {
    METHOD_NOT_ALLOWED.clone()
}

/// The handler currently used for misses on tables without their own fallback.
pub fn default_handler() -> HandlerRef {
    Arc::clone(&**DEFAULT_HANDLER.load())
}

/// Replace the process-wide fallback.
pub fn set_default_handler<H: Handler + 'static>(handler: H) {
    set_default_handler_ref(Arc::new(handler));
}

/// Replace the process-wide fallback with an already shared handler.
pub fn set_default_handler_ref(handler: HandlerRef) {
    tracing::info!("Process-wide fallback handler replaced");
    DEFAULT_HANDLER.store(Arc::new(handler));
}

/// Restore the built-in 405 handler.
pub fn reset_default_handler() {
    DEFAULT_HANDLER.store(Arc::new(method_not_allowed()));
}

pub(crate) fn serve_default(sink: &mut ResponseSink, req: &DispatchRequest) {
    DEFAULT_HANDLER.load().serve(sink, req);
}
