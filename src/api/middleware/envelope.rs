//! Error envelope for responses produced outside the handlers.

use axum::Json;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::api::dto::envelope::ApiResponse;

/// Rewrites bodyless framework errors into `{"error": "<message>"}`.
///
/// Covers `405 Method Not Allowed` from method routing and
/// `408 Request Timeout` from the timeout layer. Status and headers
/// such as `Allow` and `x-request-id` are kept; other responses pass
/// through untouched.
pub async fn wrap_empty_errors(response: Response) -> Response {
    let message = match response.status() {
        StatusCode::METHOD_NOT_ALLOWED => "method not allowed",
        StatusCode::REQUEST_TIMEOUT => "request timed out",
        _ => return response,
    };

    let (mut parts, _) = response.into_parts();
    let (envelope, body) = Json(ApiResponse::<()>::error(message))
        .into_response()
        .into_parts();

    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.extend(envelope.headers);

    Response::from_parts(parts, body)
}
