//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the example dispatch tables
//! - Wire up middleware (request ID, tracing, timeout, body limit)
//! - Bind server to listener
//! - Shut down gracefully on signal or on request
//!
//! # Routes
//! - `/single`: GET only; other methods get the process-wide fallback
//! - `/custom-fallback`: GET only; other methods get 404
//! - `/chained`: GET and POST
//! - `/literal`: GET, POST and PATCH with a 404 fallback, written as a struct literal

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::http::request::MakeRequestUuid;
use crate::http::ResponseSink;
use crate::lifecycle::ShutdownListener;
use crate::routing::{get, handler_fn, DispatchRequest, HandlerRef, MethodRouter, StatusHandler};

/// Demo server mounting one dispatch table per path.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig) -> Router {
        let echo: HandlerRef = Arc::new(handler_fn(echo_method));
        let prompt: HandlerRef = Arc::new(handler_fn(post_prompt));
        let not_found = StatusHandler::new(StatusCode::NOT_FOUND);

        let literal = MethodRouter {
            get: Some(echo.clone()),
            post: Some(prompt.clone()),
            patch: Some(prompt.clone()),
            fallback: Some(Arc::new(not_found)),
            ..Default::default()
        };

        Router::new()
            .route_service("/single", get(echo.clone()))
            .route_service("/custom-fallback", get(echo.clone()).fallback(not_found))
            .route_service("/chained", get(echo).post(prompt))
            .route_service("/literal", literal)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_size))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The fully layered router, for serving or for in-process tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until an OS signal or until `shutdown` is triggered.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: ShutdownListener,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = 4,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown.stopped_or_signalled())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

fn echo_method(sink: &mut ResponseSink, req: &DispatchRequest) {
    let _ = writeln!(sink, "Requested method: {}", req.method());
}

fn post_prompt(sink: &mut ResponseSink, _req: &DispatchRequest) {
    let _ = writeln!(sink, "Post me something");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::http::X_REQUEST_ID;

    async fn call(router: Router, method: &str, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_single_route() {
        let router = HttpServer::new(ServerConfig::default()).router();

        let (status, body) = call(router.clone(), "GET", "/single").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Requested method: GET\n");

        let (status, body) = call(router, "POST", "/single").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_custom_fallback_route() {
        let router = HttpServer::new(ServerConfig::default()).router();

        let (status, _) = call(router, "PUT", "/custom-fallback").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_chained_route() {
        let router = HttpServer::new(ServerConfig::default()).router();

        let (status, body) = call(router.clone(), "POST", "/chained").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Post me something\n");

        let (status, _) = call(router, "PATCH", "/chained").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_literal_route() {
        let router = HttpServer::new(ServerConfig::default()).router();

        let (status, body) = call(router.clone(), "PATCH", "/literal").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Post me something\n");

        let (status, _) = call(router, "DELETE", "/literal").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_request_id_is_propagated() {
        let router = HttpServer::new(ServerConfig::default()).router();
        let request = Request::builder()
            .uri("/single")
            .header(X_REQUEST_ID, "abc-123")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], "abc-123");
    }
}
