//! Repository trait for user record storage.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Keyed collection of user records.
///
/// Implementations must be safe to share between concurrently running
/// requests. Every method is fallible so that a persistent backend can
/// report storage failures; the in-memory store never does.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - `DashMap`-backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new record and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if a record with the same id already exists.
    async fn insert(&self, user: User) -> Result<User, AppError>;

    /// Finds a record by id.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// Returns every stored record in unspecified order.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// Replaces the record with the same id.
    ///
    /// Returns `Ok(false)` if no such record exists; nothing is inserted.
    async fn replace(&self, user: User) -> Result<bool, AppError>;

    /// Removes a record. Returns `Ok(false)` if it was not present.
    async fn remove(&self, id: &str) -> Result<bool, AppError>;

    /// Number of stored records.
    async fn count(&self) -> Result<usize, AppError>;
}
