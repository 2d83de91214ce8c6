//! Tests against the fully assembled application router.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;
use user_api::infrastructure::persistence::InMemoryUserRepository;
use user_api::routes::app_router;
use user_api::state::AppState;

fn app() -> tower_http::normalize_path::NormalizePath<axum::Router> {
    let state = AppState::from_repository(Arc::new(InMemoryUserRepository::seeded()));
    app_router(state, Duration::from_secs(5))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/users/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_with_trailing_slash() {
    let payload = json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "bio": "Twenty characters at least"
    });

    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/users/")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "trace-me-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.headers()["x-request-id"], "trace-me-123");
}

#[tokio::test]
async fn test_unknown_path_returns_envelope() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/nothing/here")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "resource not found");
}

#[tokio::test]
async fn test_unsupported_method() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/users/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().contains_key("allow"));
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_json(response).await["error"], "method not allowed");
}
