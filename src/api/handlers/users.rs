//! Handlers for user record endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::envelope::ApiResponse;
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::extract::ApiJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user record.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "bio": "At least twenty characters of biography"
/// }
/// ```
///
/// # Response
///
/// **201 Created** with the stored record, including its generated `id`.
///
/// # Errors
///
/// - 422 if the body cannot be decoded
/// - 400 if a field is empty or outside its length bounds
/// - 500 if the record cannot be stored
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), AppError> {
    let user = state.user_service.create_user(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::data(UserResponse::from(user))),
    ))
}

/// Lists all user records.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// An empty store returns `{"data": []}`.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(ApiResponse::data(
        users.into_iter().map(UserResponse::from).collect(),
    )))
}

/// Fetches a single user record.
///
/// # Endpoint
///
/// `GET /api/users/{id}`
///
/// # Errors
///
/// - 404 if no record has this id
/// - 500 if the stored record has an empty field
pub async fn get_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.user_service.get_user(&id).await?;

    Ok(Json(ApiResponse::data(UserResponse::from(user))))
}

/// Replaces a user record.
///
/// # Endpoint
///
/// `PUT /api/users/{id}`
///
/// # Request Body
///
/// All fields are required; the record is replaced as a whole. `id` must
/// equal the path identifier.
///
/// ```json
/// {
///   "id": "8b0f…",
///   "firstName": "Jane",
///   "lastName": "Doe",
///   "bio": "At least twenty characters of biography"
/// }
/// ```
///
/// # Errors
///
/// - 422 if the body cannot be decoded
/// - 404 if no record has this id
/// - 400 if the body id differs from the path id, or validation fails
pub async fn update_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let (body_id, profile) = payload.into_parts();

    let user = state
        .user_service
        .update_user(&id, &body_id, profile)
        .await?;

    Ok(Json(ApiResponse::data(UserResponse::from(user))))
}

/// Deletes a user record.
///
/// # Endpoint
///
/// `DELETE /api/users/{id}`
///
/// # Response
///
/// **204 No Content** with an empty body.
///
/// # Errors
///
/// - 404 if no record has this id
pub async fn delete_user_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.user_service.delete_user(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for unmatched paths.
pub async fn not_found_handler() -> AppError {
    AppError::not_found("resource not found")
}
