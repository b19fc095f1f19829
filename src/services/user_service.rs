//! User service - Handles user-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{MSG_USERNAME_REQUIRED, MSG_USERNAME_TAKEN};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a user with a unique, non-empty username
    async fn create_user(&self, username: Option<String>) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn create_user(&self, username: Option<String>) -> AppResult<User> {
        let username = username.unwrap_or_default();
        if username.trim().is_empty() {
            return Err(AppError::validation(MSG_USERNAME_REQUIRED));
        }

        if self.users.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(MSG_USERNAME_TAKEN));
        }

        let user = self.users.create(NewUser { username }).await?;
        tracing::info!(user_id = %user.id, username = %user.username, "User created");

        Ok(user)
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }
}
