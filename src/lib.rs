//! # User API
//!
//! A small HTTP service for managing user profiles, built with Axum.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - User entity, validation rules and repository trait
//! - **Application Layer** ([`application`]) - CRUD orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory storage
//! - **API Layer** ([`api`]) - REST handlers, DTOs, extractors and middleware
//!
//! ## Endpoints
//!
//! | Method | Path              | Success            |
//! |--------|-------------------|--------------------|
//! | POST   | `/api/users`      | 201 + record       |
//! | GET    | `/api/users`      | 200 + list         |
//! | GET    | `/api/users/{id}` | 200 + record       |
//! | PUT    | `/api/users/{id}` | 200 + record       |
//! | DELETE | `/api/users/{id}` | 204                |
//!
//! Every body is wrapped as `{"data": ...}` or `{"error": "..."}`.
//!
//! ## Quick Start
//!
//! ```bash
//! LISTEN=127.0.0.1:8080 cargo run
//! curl localhost:8080/api/users
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UserService;
    pub use crate::domain::entities::{User, UserProfile};
    pub use crate::domain::repositories::UserRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
}
