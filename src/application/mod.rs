//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls
//! and validation rules. Services consume repository traits and provide a
//! clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User record CRUD

pub mod services;
