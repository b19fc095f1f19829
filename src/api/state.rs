//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{ExerciseService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Exercise service
    pub exercise_service: Arc<dyn ExerciseService>,
    /// Database connection, used directly only by the health check
    pub database: Arc<Database>,
    /// Runtime configuration (static file locations)
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state from a connected database and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection());
        Self::new(&container, database, config)
    }

    /// Create application state from any service container.
    pub fn new(services: &dyn ServiceContainer, database: Arc<Database>, config: Config) -> Self {
        Self {
            user_service: services.users(),
            exercise_service: services.exercises(),
            database,
            config: Arc::new(config),
        }
    }
}
