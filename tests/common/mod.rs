//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::Bytes;
use axum::http::{Request, StatusCode};
use method_mux::config::ServerConfig;
use method_mux::routing::{
    handler_fn, DispatchRequest, Handler, MethodRouter, MethodSlot, StatusHandler,
};
use method_mux::{HttpServer, ResponseSink, Shutdown};
use tokio::net::TcpListener;

/// Status a [`succ_handler`] writes for each recognized method.
#[allow(dead_code)]
pub fn status_for(slot: MethodSlot) -> u16 {
    200 + MethodSlot::ALL.iter().position(|s| *s == slot).unwrap() as u16
}

/// Writes a status identifying the request method: 200 for GET, 201 for HEAD, ...
/// Unrecognized methods leave the status untouched (200).
#[allow(dead_code)]
pub fn succ_handler() -> impl Handler {
    handler_fn(|sink: &mut ResponseSink, req: &DispatchRequest| {
        if let Some(slot) = MethodSlot::from_method(req.method()) {
            sink.set_status(StatusCode::from_u16(status_for(slot)).unwrap());
        }
    })
}

/// Always answers 404.
#[allow(dead_code)]
pub fn dead_handler() -> StatusHandler {
    StatusHandler::new(StatusCode::NOT_FOUND)
}

/// Dispatch a bodiless request and return the resulting status.
#[allow(dead_code)]
pub fn dispatch_status(table: &MethodRouter, method: &str) -> u16 {
    let req = Request::builder().method(method).body(Bytes::new()).unwrap();
    let mut sink = ResponseSink::new();
    table.dispatch(&mut sink, &req);
    sink.status().as_u16()
}

/// Start the demo server on an ephemeral port.
#[allow(dead_code)]
pub async fn start_server(config: ServerConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let server_shutdown = shutdown.listener();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, shutdown)
}
