//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`User`] - A stored user record
//! - [`UserProfile`] - The editable part of a record, used for create and update input

pub mod user;

pub use user::{User, UserProfile};
