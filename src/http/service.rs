//! Tower integration for dispatch tables.
//!
//! A [`MethodRouter`] is itself a `tower::Service`, so it can be mounted on an
//! axum router with `route_service`:
//!
//! ```rust,ignore
//! let app = axum::Router::new().route_service("/items", get(list).post(create));
//! ```
//!
//! The service collects the request body, logs and counts the dispatch
//! outcome, dispatches synchronously into a [`ResponseSink`], and turns the
//! sink into the response.

use std::convert::Infallible;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use futures_util::future::BoxFuture;
use tower::Service;

use crate::http::ResponseSink;
use crate::observability::metrics;
use crate::routing::MethodRouter;

impl Service<Request<Body>> for MethodRouter {
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        // Tables hold no resources
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, request: Request<Body>) -> Self::Future {
        let table = self.clone();
        Box::pin(async move {
            let (parts, body) = request.into_parts();

            // Size limits are enforced by the body limit layer wrapping this service.
            let bytes = match axum::body::to_bytes(body, usize::MAX).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::warn!(
                        method = %parts.method,
                        path = %parts.uri.path(),
                        error = %e,
                        "Failed to read request body"
                    );
                    return Ok((StatusCode::BAD_REQUEST, "Failed to read request body").into_response());
                }
            };

            let request = Request::from_parts(parts, bytes);
            let outcome = table.resolve(request.method());
            if outcome.is_miss() {
                tracing::debug!(
                    method = %request.method(),
                    outcome = outcome.as_str(),
                    "No handler bound for method"
                );
            }
            metrics::record_dispatch(request.method(), outcome);

            let mut sink = ResponseSink::new();
            table.dispatch(&mut sink, &request);
            Ok(sink.into_response())
        })
    }
}
