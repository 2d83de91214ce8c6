//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryUserRepository`] - Process-local user storage, lost on exit

pub mod memory_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
