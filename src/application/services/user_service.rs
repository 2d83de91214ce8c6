//! User record management service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::{User, UserProfile};
use crate::domain::repositories::UserRepository;
use crate::domain::validation::validate_profile;
use crate::error::AppError;

const USER_NOT_FOUND: &str = "The user with the specified ID does not exist";
const USER_ID_REQUIRED: &str = "user ID is required";

/// Service for creating, reading, replacing and removing user records.
///
/// Every mutation validates its input before touching the repository, so a
/// rejected request leaves the store unchanged.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Validates a profile and stores it under a freshly generated id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if validation fails.
    /// Returns [`AppError::Internal`] if the record cannot be stored.
    pub async fn create_user(&self, profile: UserProfile) -> Result<User, AppError> {
        validate_profile(&profile)?;

        let user = User::new(Uuid::new_v4().to_string(), profile);

        let created = self
            .repository
            .insert(user)
            .await
            .map_err(storage_failure(
                "There was an error while saving the user to the database",
            ))?;

        tracing::info!(user_id = %created.id, "User created");
        Ok(created)
    }

    /// Returns every stored record. An empty store yields an empty list.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository
            .list()
            .await
            .map_err(storage_failure("The users information could not be retrieved"))
    }

    /// Retrieves a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has this id.
    /// Returns [`AppError::Internal`] if the stored record has an empty field.
    pub async fn get_user(&self, id: &str) -> Result<User, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await
            .map_err(storage_failure("The user information could not be retrieved"))?
            .ok_or_else(|| AppError::not_found(USER_NOT_FOUND))?;

        if !user.is_complete() {
            return Err(AppError::internal(
                "The user information could not be retrieved",
                format!("stored user {id} has an empty field"),
            ));
        }

        Ok(user)
    }

    /// Fully replaces the record stored under `id`.
    ///
    /// `body_id` is the identifier sent in the request body and must match `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `id` is empty, the ids differ, or
    /// validation fails.
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn update_user(
        &self,
        id: &str,
        body_id: &str,
        profile: UserProfile,
    ) -> Result<User, AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request(USER_ID_REQUIRED));
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await
            .map_err(storage_failure("The user information could not be modified"))?;
        if existing.is_none() {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        if body_id != id {
            return Err(AppError::bad_request("user ID in body does not match URL"));
        }

        validate_profile(&profile)?;

        let user = User::new(id, profile);
        let replaced = self
            .repository
            .replace(user.clone())
            .await
            .map_err(storage_failure("The user information could not be modified"))?;

        // Removed between the lookup and the write.
        if !replaced {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        tracing::info!(user_id = %id, "User updated");
        Ok(user)
    }

    /// Removes the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::BadRequest`] if `id` is empty.
    /// Returns [`AppError::NotFound`] if no record has this id.
    pub async fn delete_user(&self, id: &str) -> Result<(), AppError> {
        if id.is_empty() {
            return Err(AppError::bad_request(USER_ID_REQUIRED));
        }

        let removed = self
            .repository
            .remove(id)
            .await
            .map_err(storage_failure("The user could not be removed"))?;

        if !removed {
            return Err(AppError::not_found(USER_NOT_FOUND));
        }

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    /// Number of stored records.
    pub async fn count_users(&self) -> Result<usize, AppError> {
        self.repository.count().await
    }
}

/// Rewrites a storage error into the operation's generic message.
///
/// Client errors pass through untouched. The original message is kept in
/// the logged details.
fn storage_failure(message: &'static str) -> impl FnOnce(AppError) -> AppError {
    move |err| match err {
        AppError::Internal {
            message: original,
            details,
        } => AppError::internal(message, format!("{original}: {details}")),
        other => other,
    }
}
