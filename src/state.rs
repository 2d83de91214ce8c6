//! Shared state handed to every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::infrastructure::persistence::InMemoryUserRepository;

/// Service type backing the HTTP API.
pub type AppUserService = UserService<InMemoryUserRepository>;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    pub fn new(user_service: Arc<AppUserService>) -> Self {
        Self { user_service }
    }

    /// Builds state around an existing repository.
    pub fn from_repository(repository: Arc<InMemoryUserRepository>) -> Self {
        Self::new(Arc::new(UserService::new(repository)))
    }
}
