//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization with camelCase
//! field names on the wire.

pub mod envelope;
pub mod health;
pub mod user;
