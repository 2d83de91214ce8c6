//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User record routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /users`        - Create a user
/// - `GET    /users`        - List all users
/// - `GET    /users/{id}`   - Fetch one user
/// - `PUT    /users/{id}`   - Replace a user
/// - `DELETE /users/{id}`   - Delete a user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
}
