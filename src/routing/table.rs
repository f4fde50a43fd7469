//! Method dispatch table and its fluent builders.
//!
//! # Responsibilities
//! - Store one optional handler per recognized method plus a table fallback
//! - Dispatch a request to exactly one handler
//! - Build tables one slot at a time, in any order
//!
//! # Design Decisions
//! - HEAD falls back to GET before the miss path
//! - Miss path: table fallback, then the process-wide fallback
//! - Setting a slot twice keeps the last handler, silently
//! - A `None` slot and a never-set slot are the same thing

use std::fmt;
use std::sync::Arc;

use axum::http::Method;

use crate::http::ResponseSink;
use crate::routing::fallback::serve_default;
use crate::routing::handler::{DispatchRequest, Handler, HandlerRef};
use crate::routing::method::MethodSlot;

/// Method-to-handler bindings for one resource.
///
/// Build with the free constructors ([`get`], [`post`], ... [`fallback`]) and
/// chain further slots:
///
/// ```
/// use axum::http::StatusCode;
/// use method_mux::routing::{get, StatusHandler};
///
/// let table = get(StatusHandler::new(StatusCode::OK))
///     .post(StatusHandler::new(StatusCode::CREATED))
///     .fallback(StatusHandler::new(StatusCode::NOT_FOUND));
/// assert!(table.has_fallback());
/// ```
///
/// Fields are public, so a table can also be written as a struct literal.
#[derive(Clone, Default)]
pub struct MethodRouter {
    pub get: Option<HandlerRef>,
    pub head: Option<HandlerRef>,
    pub post: Option<HandlerRef>,
    pub put: Option<HandlerRef>,
    pub delete: Option<HandlerRef>,
    pub trace: Option<HandlerRef>,
    pub options: Option<HandlerRef>,
    pub connect: Option<HandlerRef>,
    pub patch: Option<HandlerRef>,
    /// Used on a miss instead of the process-wide fallback.
    pub fallback: Option<HandlerRef>,
}

/// Which path a dispatch takes for a given method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The method's own slot is set.
    Slot(MethodSlot),
    /// HEAD without a HEAD handler, served by GET.
    HeadViaGet,
    /// Miss, served by the table's fallback.
    TableFallback,
    /// Miss, served by the process-wide fallback.
    GlobalFallback,
}

impl Outcome {
    pub fn is_miss(self) -> bool {
        matches!(self, Outcome::TableFallback | Outcome::GlobalFallback)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Slot(_) => "slot",
            Outcome::HeadViaGet => "head_via_get",
            Outcome::TableFallback => "table_fallback",
            Outcome::GlobalFallback => "global_fallback",
        }
    }
}

impl MethodRouter {
    /// An empty table. Every method takes the miss path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `slot` to `handler`, replacing any previous handler.
    pub fn on<H: Handler + 'static>(self, slot: MethodSlot, handler: H) -> Self {
        self.on_ref(slot, Arc::new(handler))
    }

    /// Like [`MethodRouter::on`] for a handler that is already shared.
    pub fn on_ref(self, slot: MethodSlot, handler: HandlerRef) -> Self {
        self.on_opt(slot, Some(handler))
    }

    /// Set `slot` as given. `None` leaves the slot unset, replacing any
    /// previous handler, so the method takes the miss path.
    pub fn on_opt(mut self, slot: MethodSlot, handler: Option<HandlerRef>) -> Self {
        *self.slot_mut(slot) = handler;
        self
    }

    /// Set the table fallback, replacing any previous one.
    pub fn fallback<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.fallback = Some(Arc::new(handler));
        self
    }

    pub fn slot(&self, slot: MethodSlot) -> Option<&HandlerRef> {
        match slot {
            MethodSlot::Get => self.get.as_ref(),
            MethodSlot::Head => self.head.as_ref(),
            MethodSlot::Post => self.post.as_ref(),
            MethodSlot::Put => self.put.as_ref(),
            MethodSlot::Delete => self.delete.as_ref(),
            MethodSlot::Trace => self.trace.as_ref(),
            MethodSlot::Options => self.options.as_ref(),
            MethodSlot::Connect => self.connect.as_ref(),
            MethodSlot::Patch => self.patch.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MethodSlot) -> &mut Option<HandlerRef> {
        match slot {
            MethodSlot::Get => &mut self.get,
            MethodSlot::Head => &mut self.head,
            MethodSlot::Post => &mut self.post,
            MethodSlot::Put => &mut self.put,
            MethodSlot::Delete => &mut self.delete,
            MethodSlot::Trace => &mut self.trace,
            MethodSlot::Options => &mut self.options,
            MethodSlot::Connect => &mut self.connect,
            MethodSlot::Patch => &mut self.patch,
        }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Methods that reach a handler slot, in canonical order.
    /// HEAD is included whenever GET is set.
    pub fn allowed_methods(&self) -> Vec<MethodSlot> {
        MethodSlot::ALL
            .into_iter()
            .filter(|slot| matches!(self.resolve(&slot.to_method()), Outcome::Slot(_) | Outcome::HeadViaGet))
            .collect()
    }

    /// Report the path `method` would take, without invoking anything.
    pub fn resolve(&self, method: &Method) -> Outcome {
        self.select(method).0
    }

    fn select(&self, method: &Method) -> (Outcome, Option<&HandlerRef>) {
        if let Some(slot) = MethodSlot::from_method(method) {
            if let Some(handler) = self.slot(slot) {
                return (Outcome::Slot(slot), Some(handler));
            }
            if slot == MethodSlot::Head {
                if let Some(handler) = self.get.as_ref() {
                    return (Outcome::HeadViaGet, Some(handler));
                }
            }
        }

        match self.fallback.as_ref() {
            Some(handler) => (Outcome::TableFallback, Some(handler)),
            None => (Outcome::GlobalFallback, None),
        }
    }

    /// Invoke exactly one handler for `req`.
    ///
    /// Never fails: a method without a handler goes to the table fallback,
    /// or to the process-wide fallback when the table has none. Only reads the
    /// table and the process-wide fallback; logging and metrics belong to the
    /// caller.
    pub fn dispatch(&self, sink: &mut ResponseSink, req: &DispatchRequest) {
        match self.select(req.method()).1 {
            Some(handler) => handler.serve(sink, req),
            None => serve_default(sink, req),
        }
    }
}

impl Handler for MethodRouter {
    fn serve(&self, sink: &mut ResponseSink, req: &DispatchRequest) {
        self.dispatch(sink, req);
    }
}

impl fmt::Debug for MethodRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<MethodSlot> = MethodSlot::ALL
            .into_iter()
            .filter(|slot| self.slot(*slot).is_some())
            .collect();
        f.debug_struct("MethodRouter")
            .field("slots", &bound)
            .field("fallback", &self.has_fallback())
            .finish()
    }
}

/// A table with only the fallback set.
pub fn fallback<H: Handler + 'static>(handler: H) -> MethodRouter {
    MethodRouter::new().fallback(handler)
}

// Each verb gets a free constructor and a chaining method of the same name.
macro_rules! slot_builders {
    ($($(#[$doc:meta])* $name:ident => $slot:ident;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<H: Handler + 'static>(handler: H) -> MethodRouter {
                MethodRouter::new().$name(handler)
            }
        )*

        impl MethodRouter {
            $(
                $(#[$doc])*
                pub fn $name<H: Handler + 'static>(self, handler: H) -> Self {
                    self.on(MethodSlot::$slot, handler)
                }
            )*
        }
    };
}

slot_builders! {
    /// Handler for GET. Also serves HEAD while no HEAD handler is set.
    get => Get;
    /// Handler for HEAD. Takes precedence over GET for HEAD requests.
    head => Head;
    /// Handler for POST.
    post => Post;
    /// Handler for PUT.
    put => Put;
    /// Handler for DELETE.
    delete => Delete;
    /// Handler for TRACE.
    trace => Trace;
    /// Handler for OPTIONS.
    options => Options;
    /// Handler for CONNECT.
    connect => Connect;
    /// Handler for PATCH.
    patch => Patch;
}
