//! Request id generation and propagation.
//!
//! Incoming requests without an `x-request-id` header get a fresh UUID.
//! The id is copied onto the response so clients can correlate logs.

use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};

/// Assigns an `x-request-id` to requests that lack one.
///
/// Must wrap the tracing layer so the id is visible in the request span.
pub fn set_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::x_request_id(MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
pub fn propagate_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::x_request_id()
}
