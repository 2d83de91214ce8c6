//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::HealthResponse;
use crate::state::AppState;

/// Returns service liveness and the current store size.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: store reachable
/// - **503 Service Unavailable**: store query failed
///
/// # Response
///
/// ```json
/// { "status": "healthy", "version": "0.1.0", "users": 1 }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.user_service.count_users().await {
        Ok(users) => Ok(Json(HealthResponse {
            status: "healthy".to_string(),
            version,
            users: Some(users),
        })),
        Err(e) => {
            tracing::warn!(error = %e, "Health check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded".to_string(),
                    version,
                    users: None,
                }),
            ))
        }
    }
}
