//! Request extractors.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejections are rendered as [`AppError`].
///
/// The body is decoded as JSON whatever its `Content-Type`. A body that
/// cannot be read or decoded (bad syntax, wrong field types) yields 422
/// with the envelope `{"error": "invalid request body"}`.
#[derive(Debug)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;

        serde_json::from_slice(&bytes).map(ApiJson).map_err(|e| {
            tracing::debug!(error = %e, "Rejected request body");
            AppError::unprocessable("invalid request body")
        })
    }
}

/// Deserializes a JSON string field, reading `null` as an empty string.
pub fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
