//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Liveness and store size
//! - `/api/users*`       - User record CRUD
//! - anything else       - 404 envelope
//!
//! # Middleware
//!
//! From outermost to innermost:
//!
//! - **Path normalization** - Trailing slash handling (`/api/users/` == `/api/users`)
//! - **Request id** - `x-request-id` assigned and echoed back
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - Panics become 500 responses
//! - **Error envelope** - Bodyless 405/408 responses get `{"error": ...}`
//! - **Timeout** - Slow requests are cut off with 408

use std::time::Duration;

use crate::api;
use crate::api::handlers::{health_handler, not_found_handler};
use crate::api::middleware::{envelope, panic, request_id, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - upper bound on handling a single request
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api::routes::user_routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(timeout::layer(request_timeout))
        .layer(map_response(envelope::wrap_empty_errors))
        .layer(panic::layer())
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
