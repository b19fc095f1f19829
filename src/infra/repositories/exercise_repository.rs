//! Exercise repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use super::entities::exercise::{self, ActiveModel, Entity as ExerciseEntity};
use crate::domain::{check_schema, Exercise, LogFilter, NewExercise};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Exercise repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExerciseRepository: Send + Sync {
    /// Store a new exercise; the date defaults to now
    async fn create(&self, exercise: NewExercise) -> AppResult<Exercise>;

    /// Exercises matching the filter, ascending by date
    async fn find_log(&self, filter: &LogFilter) -> AppResult<Vec<Exercise>>;
}

/// Concrete implementation of ExerciseRepository
pub struct ExerciseStore {
    db: DatabaseConnection,
}

impl ExerciseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExerciseRepository for ExerciseStore {
    async fn create(&self, exercise: NewExercise) -> AppResult<Exercise> {
        check_schema(&exercise)?;

        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(exercise.user_id),
            description: Set(exercise.description),
            duration: Set(exercise.duration),
            date: Set(exercise.date.unwrap_or(now)),
            created_at: Set(now),
        };

        let model = active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(Exercise::from(model))
    }

    async fn find_log(&self, filter: &LogFilter) -> AppResult<Vec<Exercise>> {
        let mut query = ExerciseEntity::find().filter(exercise::Column::UserId.eq(filter.user_id));

        if let Some(from) = filter.from {
            query = query.filter(exercise::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(exercise::Column::Date.lte(to));
        }

        query = query.order_by_asc(exercise::Column::Date);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        let models = query.all(&self.db).await.map_err(AppError::from)?;

        Ok(models.into_iter().map(Exercise::from).collect())
    }
}
