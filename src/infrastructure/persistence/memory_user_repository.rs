//! In-memory implementation of the user repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Process-local user store keyed by id.
///
/// Backed by a sharded concurrent map, so handlers running on different
/// worker threads never observe a torn record. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: DashMap<String, User>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the single [`User::seed`] record.
    pub fn seeded() -> Self {
        let repository = Self::new();
        let seed = User::seed();
        repository.users.insert(seed.id.clone(), seed);
        repository
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: User) -> Result<User, AppError> {
        match self.users.entry(user.id.clone()) {
            Entry::Occupied(_) => Err(AppError::internal(
                "There was an error while saving the user to the database",
                format!("duplicate user id {}", user.id),
            )),
            Entry::Vacant(slot) => {
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.get(id).map(|entry| entry.value().clone()))
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self
            .users
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn replace(&self, user: User) -> Result<bool, AppError> {
        match self.users.get_mut(&user.id) {
            Some(mut existing) => {
                *existing = user;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> Result<bool, AppError> {
        Ok(self.users.remove(id).is_some())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.users.len())
    }
}
