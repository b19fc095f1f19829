//! Service Container - Centralized service access.
//!
//! Handlers reach services only through trait objects.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{ExerciseManager, ExerciseService, UserManager, UserService};
use crate::infra::{ExerciseStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get exercise service
    fn exercises(&self) -> Arc<dyn ExerciseService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    exercise_service: Arc<dyn ExerciseService>,
}

impl Services {
    /// Create service container over a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let exercises = Arc::new(ExerciseStore::new(db));

        let user_service = Arc::new(UserManager::new(users.clone()));
        let exercise_service = Arc::new(ExerciseManager::new(users, exercises));

        Self {
            user_service,
            exercise_service,
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn exercises(&self) -> Arc<dyn ExerciseService> {
        self.exercise_service.clone()
    }
}
