//! DTOs for health check endpoint.

use serde::Serialize;

/// Liveness report.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    pub version: String,
    /// Number of stored users, absent if the store could not be queried.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<usize>,
}
