//! Application error type and its HTTP rendering.
//!
//! Every error is rendered through the [`ApiResponse`] envelope as
//! `{"error": "<message>"}`. Client errors carry a descriptive message,
//! internal errors carry a generic one and are logged with their details.

use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::dto::envelope::ApiResponse;
use crate::domain::validation::ValidationError;

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or mismatched identifier, or a profile that failed validation.
    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// Request body could not be decoded.
    #[error("{message}")]
    UnprocessableEntity { message: String },

    /// Storage or serialization failure. `details` is logged, never returned.
    #[error("{message}")]
    Internal { message: String, details: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::UnprocessableEntity {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            details: details.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnprocessableEntity { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns true for errors caused by the server rather than the request.
    pub fn is_internal(&self) -> bool {
        matches!(self, AppError::Internal { .. })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            AppError::Internal { message, details } => {
                tracing::error!(%details, "{}", message);
                message
            }
            AppError::BadRequest { message }
            | AppError::NotFound { message }
            | AppError::UnprocessableEntity { message } => message,
        };

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        if let ValidationError::OutOfBounds { fields } = &err {
            tracing::debug!(?fields, "Profile rejected");
        }
        AppError::bad_request(err.to_string())
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        tracing::debug!(reason = %rejection.body_text(), "Failed to read request body");
        AppError::unprocessable("invalid request body")
    }
}
