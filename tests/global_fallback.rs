//! Reassigning the process-wide fallback.
//!
//! Kept in its own test binary, as a single test, because it mutates global state.

use axum::http::StatusCode;
use method_mux::config::FallbackConfig;
use method_mux::lifecycle::startup::apply_fallback;
use method_mux::routing::{
    default_handler, fallback, get, reset_default_handler, set_default_handler, Handler,
    MethodSlot, Outcome, StatusHandler,
};

mod common;

use common::{dead_handler, dispatch_status, status_for, succ_handler};

#[test]
fn test_process_wide_fallback_lifecycle() {
    let table = get(succ_handler());
    let with_own = get(succ_handler()).fallback(dead_handler());

    // Built-in default
    assert_eq!(dispatch_status(&table, "POST"), 405);
    assert_eq!(table.resolve(&axum::http::Method::POST), Outcome::GlobalFallback);

    // Reassigned default is used by tables without their own fallback
    set_default_handler(StatusHandler::new(StatusCode::IM_A_TEAPOT));
    assert_eq!(dispatch_status(&table, "POST"), 418);
    assert_eq!(dispatch_status(&table, "UNKNOWN"), 418);
    assert_eq!(dispatch_status(&table, "HEAD"), status_for(MethodSlot::Head));

    // A table fallback still wins
    assert_eq!(dispatch_status(&with_own, "POST"), 404);
    assert_eq!(dispatch_status(&fallback(succ_handler()), "PUT"), status_for(MethodSlot::Put));

    // Readable through the accessor
    let mut sink = method_mux::ResponseSink::new();
    let req = axum::http::Request::builder()
        .method("PATCH")
        .body(axum::body::Bytes::new())
        .unwrap();
    default_handler().serve(&mut sink, &req);
    assert_eq!(sink.status(), StatusCode::IM_A_TEAPOT);

    reset_default_handler();
    assert_eq!(dispatch_status(&table, "POST"), 405);

    // Startup policy from configuration
    apply_fallback(&FallbackConfig { status: 404 }).unwrap();
    assert_eq!(dispatch_status(&table, "DELETE"), 404);

    apply_fallback(&FallbackConfig { status: 405 }).unwrap();
    assert_eq!(dispatch_status(&table, "DELETE"), 405);

    assert!(apply_fallback(&FallbackConfig { status: 42 }).is_err());
    assert_eq!(dispatch_status(&table, "DELETE"), 405);
}
