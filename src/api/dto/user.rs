//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};

use crate::api::extract::null_as_empty;
use crate::domain::entities::{User, UserProfile};

/// Request body for `POST /api/users`.
///
/// Absent and `null` fields deserialize as empty strings and are then
/// rejected by validation with 400, not by the body decoder with 422.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bio: String,
}

impl From<CreateUserRequest> for UserProfile {
    fn from(request: CreateUserRequest) -> Self {
        UserProfile::new(request.first_name, request.last_name, request.bio)
    }
}

/// Request body for `PUT /api/users/{id}`.
///
/// `id` must repeat the identifier from the path.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(deserialize_with = "null_as_empty")]
    pub id: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bio: String,
}

impl UpdateUserRequest {
    /// Splits the body into its identifier and profile.
    pub fn into_parts(self) -> (String, UserProfile) {
        (
            self.id,
            UserProfile::new(self.first_name, self.last_name, self.bio),
        )
    }
}

/// JSON representation of a stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            bio: user.bio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_uses_camel_case() {
        let value = serde_json::to_value(UserResponse::from(User::seed())).unwrap();

        assert_eq!(
            value,
            json!({
                "id": "1",
                "firstName": "John",
                "lastName": "Doe",
                "bio": "A sample user"
            })
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: CreateUserRequest =
            serde_json::from_value(json!({ "firstName": "Jane" })).unwrap();

        assert_eq!(request.first_name, "Jane");
        assert!(request.last_name.is_empty());
        assert!(request.bio.is_empty());
    }

    #[test]
    fn test_null_fields_default_to_empty() {
        let request: UpdateUserRequest = serde_json::from_value(json!({
            "id": null,
            "firstName": null,
            "lastName": "Roe",
            "bio": null
        }))
        .unwrap();

        assert!(request.id.is_empty());
        assert!(request.first_name.is_empty());
        assert_eq!(request.last_name, "Roe");
        assert!(request.bio.is_empty());
    }

    #[test]
    fn test_wrong_field_type_is_rejected() {
        let result: Result<CreateUserRequest, _> =
            serde_json::from_value(json!({ "firstName": 42 }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_into_parts() {
        let request: UpdateUserRequest = serde_json::from_value(json!({
            "id": "42",
            "firstName": "Jane",
            "lastName": "Roe",
            "bio": "Keeps the lights on"
        }))
        .unwrap();

        let (id, profile) = request.into_parts();
        assert_eq!(id, "42");
        assert_eq!(profile, UserProfile::new("Jane", "Roe", "Keeps the lights on"));
    }
}
