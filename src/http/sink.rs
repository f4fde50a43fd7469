//! Response sink handed to handlers.
//!
//! # Responsibilities
//! - Collect status, headers and body written by exactly one handler
//! - Convert the collected parts into an axum response
//!
//! # Design Decisions
//! - Status defaults to 200 OK, like a handler that only writes a body
//! - Body is buffered; HEAD bodies are dropped by the transport, not here

use std::io;

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, StatusCode};
use axum::response::Response;

/// Output channel a [`Handler`](crate::routing::Handler) writes its response into.
#[derive(Debug, Default)]
pub struct ResponseSink {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Set the response status. Later calls replace earlier ones.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// Insert a header, replacing any previous value.
    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Append raw bytes to the body.
    pub fn write_body(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consume the sink into a response.
    pub fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl io::Write for ResponseSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_body(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header;
    use std::io::Write;

    #[test]
    fn test_defaults_to_ok_and_empty() {
        let sink = ResponseSink::new();
        assert_eq!(sink.status(), StatusCode::OK);
        assert!(sink.headers().is_empty());
        assert!(sink.body().is_empty());
    }

    #[test]
    fn test_write_macro_appends_body() {
        let mut sink = ResponseSink::new();
        write!(sink, "Requested method: {}", "GET").unwrap();
        sink.write_body(b"\n");
        assert_eq!(sink.body(), b"Requested method: GET\n");
    }

    #[tokio::test]
    async fn test_into_response_keeps_parts() {
        let mut sink = ResponseSink::new();
        sink.set_status(StatusCode::CREATED);
        sink.insert_header(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        sink.write_body(b"made");

        let response = sink.into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/plain");

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"made");
    }
}
