#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use user_api::api::handlers::health_handler;
use user_api::api::routes::user_routes;
use user_api::domain::entities::User;
use user_api::domain::repositories::UserRepository;
use user_api::infrastructure::persistence::InMemoryUserRepository;
use user_api::state::AppState;

/// A biography of exactly `len` characters.
pub fn bio_of_len(len: usize) -> String {
    "x".repeat(len)
}

pub fn valid_bio() -> String {
    "Writes software and occasionally documentation".to_string()
}

pub fn create_body(first_name: &str, last_name: &str, bio: &str) -> Value {
    json!({ "firstName": first_name, "lastName": last_name, "bio": bio })
}

pub fn update_body(id: &str, first_name: &str, last_name: &str, bio: &str) -> Value {
    json!({ "id": id, "firstName": first_name, "lastName": last_name, "bio": bio })
}

/// Stores a record directly, bypassing validation.
pub async fn insert_raw(repository: &InMemoryUserRepository, user: User) {
    repository.insert(user).await.unwrap();
}

pub fn create_test_state(repository: Arc<InMemoryUserRepository>) -> AppState {
    AppState::from_repository(repository)
}

/// Test server over the API routes and the health endpoint, without the
/// top-level middleware stack.
pub fn make_server(repository: Arc<InMemoryUserRepository>) -> TestServer {
    let state = create_test_state(repository);
    let app = Router::new()
        .route("/health", axum::routing::get(health_handler))
        .nest("/api", user_routes())
        .with_state(state);
    TestServer::new(app).unwrap()
}

pub fn seeded_server() -> TestServer {
    make_server(Arc::new(InMemoryUserRepository::seeded()))
}

pub fn empty_server() -> TestServer {
    make_server(Arc::new(InMemoryUserRepository::new()))
}
