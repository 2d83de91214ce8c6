//! Per-request timeout middleware.

use std::time::Duration;

use axum::http::StatusCode;
use tower_http::timeout::TimeoutLayer;

/// Aborts requests that take longer than `timeout` with `408 Request Timeout`.
///
/// Bounds both reading the request body and producing the response.
pub fn layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}
