//! Uniform response wrapper.

use serde::Serialize;

/// Body of every API response.
///
/// Exactly one of the fields is set; the other is omitted from the JSON.
///
/// ```json
/// { "data": { "id": "1", "firstName": "John", "lastName": "Doe", "bio": "..." } }
/// { "error": "The user with the specified ID does not exist" }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn data(data: T) -> Self {
        Self {
            error: None,
            data: Some(data),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            data: None,
        }
    }
}
