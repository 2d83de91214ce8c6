//! Domain layer containing business entities and logic.
//!
//! This module defines the user record, the rules a profile must satisfy,
//! and the repository contract implemented by the infrastructure layer.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`validation`] - Presence and length rules for user profiles
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod repositories;
pub mod validation;
