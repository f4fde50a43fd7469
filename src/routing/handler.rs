//! Handler abstraction invoked by the dispatch table.

use std::fmt;
use std::sync::Arc;

use axum::body::Bytes;
use axum::http::{Request, StatusCode};

use crate::http::ResponseSink;

/// A request whose body has already been collected.
pub type DispatchRequest = Request<Bytes>;

/// Shared handler reference. The same handler may sit in several slots or tables.
pub type HandlerRef = Arc<dyn Handler>;

/// Anything that can answer a request by writing into a [`ResponseSink`].
pub trait Handler: Send + Sync {
    fn serve(&self, sink: &mut ResponseSink, req: &DispatchRequest);
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn serve(&self, sink: &mut ResponseSink, req: &DispatchRequest) {
        (**self).serve(sink, req)
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn serve(&self, sink: &mut ResponseSink, req: &DispatchRequest) {
        (**self).serve(sink, req)
    }
}

/// Handler backed by a closure. Built with [`handler_fn`].
#[derive(Clone)]
pub struct HandlerFn<F> {
    f: F,
}

/// Wrap a closure `Fn(&mut ResponseSink, &DispatchRequest)` as a [`Handler`].
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&mut ResponseSink, &DispatchRequest) + Send + Sync,
{
    HandlerFn { f }
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&mut ResponseSink, &DispatchRequest) + Send + Sync,
{
    fn serve(&self, sink: &mut ResponseSink, req: &DispatchRequest) {
        (self.f)(sink, req)
    }
}

impl<F> fmt::Debug for HandlerFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerFn").finish_non_exhaustive()
    }
}

/// Writes a fixed status code and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusHandler {
    status: StatusCode,
}

impl StatusHandler {
    pub fn new(status: StatusCode) -> Self {
        Self { status }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl Handler for StatusHandler {
    fn serve(&self, sink: &mut ResponseSink, _req: &DispatchRequest) {
        sink.set_status(self.status);
    }
}
