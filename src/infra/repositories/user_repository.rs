//! User repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::config::MSG_USERNAME_TAKEN;
use crate::domain::{check_schema, NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Create a new user; fails with a conflict if the username is taken
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// List all users in store order
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        check_schema(&user)?;

        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            username: Set(user.username),
            created_at: Set(chrono::Utc::now()),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            // Lost a race with a concurrent insert of the same username
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::conflict(MSG_USERNAME_TAKEN))
            }
            Err(err) => Err(AppError::from(err)),
        }
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::Database;

    async fn store() -> UserStore {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        UserStore::new(db.get_connection())
    }

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
        }
    }

    #[tokio::test]
    async fn test_unique_index_rejects_duplicate_username() {
        let store = store().await;
        store.create(new_user("jane")).await.unwrap();

        // Skips the service-level lookup, as a concurrent insert would
        let err = store.create(new_user("jane")).await.unwrap_err();

        assert!(matches!(err, AppError::Conflict(ref m) if m == MSG_USERNAME_TAKEN));
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let store = store().await;
        let user = store.create(new_user("sam")).await.unwrap();

        let by_id = store.find_by_id(user.id).await.unwrap().unwrap();
        let by_name = store.find_by_username("sam").await.unwrap().unwrap();

        assert_eq!(by_id.id, user.id);
        assert_eq!(by_name.id, user.id);
        assert!(store.find_by_username("other").await.unwrap().is_none());
    }
}
