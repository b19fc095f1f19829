//! Exercise service - Logging exercises and querying exercise logs.
//!
//! Input checks run in a fixed order and the first failure is reported:
//!
//! - add: path id, description, duration present, duration numeric, date,
//!   then the owning user must exist
//! - log: `from`, `to`, `limit`, then the user must exist

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{
    MSG_DATE_INVALID, MSG_DESCRIPTION_REQUIRED, MSG_DURATION_NOT_NUMBER, MSG_DURATION_REQUIRED,
    MSG_FROM_DATE_INVALID, MSG_LIMIT_NOT_NUMBER, MSG_TO_DATE_INVALID, MSG_USER_ID_REQUIRED,
    MSG_USER_NOT_FOUND, PLACEHOLDER_USER_ID,
};
use crate::domain::{
    ExerciseLog, LogFilter, LogQuery, LoggedExercise, NewExercise, NewExerciseRequest, User,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{ExerciseRepository, UserRepository};
use crate::utils::{parse_date, parse_date_input, parse_int_input, parse_leading_int};

/// Exercise service trait for dependency injection.
#[async_trait]
pub trait ExerciseService: Send + Sync {
    /// Log an exercise for the user identified by `user_id`
    async fn add_exercise(
        &self,
        user_id: &str,
        request: NewExerciseRequest,
    ) -> AppResult<LoggedExercise>;

    /// Get the user's exercises, filtered by date range and limited
    async fn get_log(&self, user_id: &str, query: LogQuery) -> AppResult<ExerciseLog>;
}

/// Concrete implementation of ExerciseService.
pub struct ExerciseManager {
    users: Arc<dyn UserRepository>,
    exercises: Arc<dyn ExerciseRepository>,
}

impl ExerciseManager {
    /// Create new exercise service instance
    pub fn new(users: Arc<dyn UserRepository>, exercises: Arc<dyn ExerciseRepository>) -> Self {
        Self { users, exercises }
    }

    /// Resolve a path id to an existing user.
    async fn find_user(&self, user_id: &str) -> AppResult<User> {
        // A malformed id cannot name any user
        let Ok(id) = Uuid::parse_str(user_id.trim()) else {
            return Err(AppError::not_found(MSG_USER_NOT_FOUND));
        };

        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(MSG_USER_NOT_FOUND))
    }
}

/// Parse an optional date-range bound; empty values mean "no bound".
fn parse_bound(raw: Option<&str>, message: &str) -> AppResult<Option<DateTime<Utc>>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| AppError::validation(message)),
    }
}

/// Parse the `limit` parameter; zero means unlimited.
fn parse_limit(raw: Option<&str>) -> AppResult<Option<u64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let limit = parse_leading_int(raw).ok_or_else(|| AppError::validation(MSG_LIMIT_NOT_NUMBER))?;

    // Negative limits behave like their magnitude
    Ok(match limit.unsigned_abs() {
        0 => None,
        n => Some(n),
    })
}

#[async_trait]
impl ExerciseService for ExerciseManager {
    async fn add_exercise(
        &self,
        user_id: &str,
        request: NewExerciseRequest,
    ) -> AppResult<LoggedExercise> {
        let trimmed_id = user_id.trim();
        if trimmed_id.is_empty() || trimmed_id == PLACEHOLDER_USER_ID {
            return Err(AppError::validation(MSG_USER_ID_REQUIRED));
        }

        let description = match request.description {
            Some(description) if !description.trim().is_empty() => description,
            _ => return Err(AppError::validation(MSG_DESCRIPTION_REQUIRED)),
        };

        let duration = match request.duration {
            Some(ref duration) if !duration.is_blank() => duration,
            _ => return Err(AppError::validation(MSG_DURATION_REQUIRED)),
        };
        let duration =
            parse_int_input(duration).ok_or_else(|| AppError::validation(MSG_DURATION_NOT_NUMBER))?;

        let date = match request.date {
            Some(ref date) if !date.is_blank() => Some(
                parse_date_input(date).ok_or_else(|| AppError::validation(MSG_DATE_INVALID))?,
            ),
            _ => None,
        };

        let user = self.find_user(trimmed_id).await?;

        let exercise = self
            .exercises
            .create(NewExercise {
                user_id: user.id,
                description,
                duration,
                date,
            })
            .await?;

        tracing::info!(
            user_id = %user.id,
            exercise_id = %exercise.id,
            duration = exercise.duration,
            "Exercise logged"
        );

        Ok(LoggedExercise { user, exercise })
    }

    async fn get_log(&self, user_id: &str, query: LogQuery) -> AppResult<ExerciseLog> {
        let from = parse_bound(query.from.as_deref(), MSG_FROM_DATE_INVALID)?;
        let to = parse_bound(query.to.as_deref(), MSG_TO_DATE_INVALID)?;
        let limit = parse_limit(query.limit.as_deref())?;

        let user = self.find_user(user_id).await?;

        let filter = LogFilter {
            user_id: user.id,
            from,
            to,
            limit,
        };
        tracing::debug!(?filter, "Querying exercise log");

        let entries = self.exercises.find_log(&filter).await?;

        Ok(ExerciseLog { user, entries })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::domain::{Exercise, ScalarInput};
    use crate::infra::{MockExerciseRepository, MockUserRepository};

    fn user_with_id(id: Uuid) -> User {
        User::new(id, "jane".to_string())
    }

    /// User repository that knows exactly one user
    fn users_with(id: Uuid) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .returning(move |requested| Ok((requested == id).then(|| user_with_id(id))));
        repo
    }

    fn service(users: MockUserRepository, exercises: MockExerciseRepository) -> ExerciseManager {
        ExerciseManager::new(Arc::new(users), Arc::new(exercises))
    }

    fn request(description: &str, duration: &str, date: Option<&str>) -> NewExerciseRequest {
        NewExerciseRequest {
            description: Some(description.to_string()),
            duration: Some(ScalarInput::from(duration)),
            date: date.map(ScalarInput::from),
        }
    }

    fn validation_message(err: AppError) -> String {
        match err {
            AppError::Validation(message) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_add_exercise_success_defaults_date() {
        let id = Uuid::new_v4();
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_create()
            .withf(move |e| e.user_id == id && e.duration == 30 && e.date.is_none())
            .times(1)
            .returning(|e| {
                Ok(Exercise {
                    id: Uuid::new_v4(),
                    user_id: e.user_id,
                    description: e.description,
                    duration: e.duration,
                    date: Utc::now(),
                })
            });

        let logged = service(users_with(id), exercises)
            .add_exercise(&id.to_string(), request("run", "30", None))
            .await
            .unwrap();

        assert_eq!(logged.user.id, id);
        assert_eq!(logged.exercise.description, "run");
    }

    #[tokio::test]
    async fn test_add_exercise_parses_supplied_date() {
        let id = Uuid::new_v4();
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_create()
            .withf(move |e| e.date == Some(expected))
            .times(1)
            .returning(move |e| {
                Ok(Exercise {
                    id: Uuid::new_v4(),
                    user_id: e.user_id,
                    description: e.description,
                    duration: e.duration,
                    date: expected,
                })
            });

        let result = service(users_with(id), exercises)
            .add_exercise(&id.to_string(), request("swim", "45", Some("2024-01-15")))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_add_exercise_validation_order() {
        let id = Uuid::new_v4().to_string();
        // No repository expectations: validation must fail before any store call
        let service = service(MockUserRepository::new(), MockExerciseRepository::new());

        let cases = [
            ("0", request("", "", Some("bad")), MSG_USER_ID_REQUIRED),
            (" ", request("run", "30", None), MSG_USER_ID_REQUIRED),
            (id.as_str(), request("", "abc", Some("bad")), MSG_DESCRIPTION_REQUIRED),
            (id.as_str(), request("run", "", Some("bad")), MSG_DURATION_REQUIRED),
            (id.as_str(), request("run", "abc", Some("bad")), MSG_DURATION_NOT_NUMBER),
            (id.as_str(), request("run", "30", Some("not a date")), MSG_DATE_INVALID),
        ];

        for (user_id, req, expected) in cases {
            let err = service.add_exercise(user_id, req).await.unwrap_err();
            assert_eq!(validation_message(err), expected);
        }
    }

    #[tokio::test]
    async fn test_add_exercise_missing_fields() {
        let service = service(MockUserRepository::new(), MockExerciseRepository::new());
        let id = Uuid::new_v4().to_string();

        let err = service
            .add_exercise(&id, NewExerciseRequest::default())
            .await
            .unwrap_err();
        assert_eq!(validation_message(err), MSG_DESCRIPTION_REQUIRED);

        let req = NewExerciseRequest {
            description: Some("run".to_string()),
            ..Default::default()
        };
        let err = service.add_exercise(&id, req).await.unwrap_err();
        assert_eq!(validation_message(err), MSG_DURATION_REQUIRED);
    }

    #[tokio::test]
    async fn test_add_exercise_unknown_user() {
        let mut exercises = MockExerciseRepository::new();
        exercises.expect_create().never();
        let service = service(users_with(Uuid::new_v4()), exercises);

        for user_id in [Uuid::new_v4().to_string(), "not-a-uuid".to_string()] {
            let err = service
                .add_exercise(&user_id, request("run", "30", None))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(ref m) if m == MSG_USER_NOT_FOUND));
        }
    }

    #[tokio::test]
    async fn test_get_log_builds_filter() {
        let id = Uuid::new_v4();
        let from = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let to = Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap();
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_find_log()
            .withf(move |f| {
                *f == LogFilter {
                    user_id: id,
                    from: Some(from),
                    to: Some(to),
                    limit: Some(1),
                }
            })
            .times(1)
            .returning(|_| Ok(vec![]));

        let query = LogQuery {
            from: Some("2024-01-01".to_string()),
            to: Some("2024-01-02".to_string()),
            limit: Some("1".to_string()),
        };
        let log = service(users_with(id), exercises)
            .get_log(&id.to_string(), query)
            .await
            .unwrap();

        assert_eq!(log.user.id, id);
        assert!(log.entries.is_empty());
    }

    #[tokio::test]
    async fn test_get_log_empty_bounds_and_zero_limit_are_unbounded() {
        let id = Uuid::new_v4();
        let mut exercises = MockExerciseRepository::new();
        exercises
            .expect_find_log()
            .withf(move |f| *f == LogFilter::for_user(id))
            .times(1)
            .returning(|_| Ok(vec![]));

        let query = LogQuery {
            from: Some(String::new()),
            to: None,
            limit: Some("0".to_string()),
        };
        let result = service(users_with(id), exercises)
            .get_log(&id.to_string(), query)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_log_validation_order() {
        let id = Uuid::new_v4().to_string();
        let service = service(MockUserRepository::new(), MockExerciseRepository::new());

        let query = |from: Option<&str>, to: Option<&str>, limit: Option<&str>| LogQuery {
            from: from.map(String::from),
            to: to.map(String::from),
            limit: limit.map(String::from),
        };

        let cases = [
            (query(Some("bad"), Some("bad"), Some("x")), MSG_FROM_DATE_INVALID),
            (query(Some("2024-01-01"), Some("bad"), Some("x")), MSG_TO_DATE_INVALID),
            (query(None, None, Some("x")), MSG_LIMIT_NOT_NUMBER),
            (query(None, None, Some("")), MSG_LIMIT_NOT_NUMBER),
        ];

        for (q, expected) in cases {
            let err = service.get_log(&id, q).await.unwrap_err();
            assert_eq!(validation_message(err), expected);
        }
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None).unwrap(), None);
        assert_eq!(parse_limit(Some("0")).unwrap(), None);
        assert_eq!(parse_limit(Some("5")).unwrap(), Some(5));
        assert_eq!(parse_limit(Some("-2")).unwrap(), Some(2));
        assert!(parse_limit(Some("many")).is_err());
    }
}
