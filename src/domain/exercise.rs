//! Exercise domain entity, log query types and response shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::schema::SchemaFields;
use super::user::User;
use crate::utils::dates::format_calendar_date;

/// Exercise domain entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    /// Minutes
    pub duration: i64,
    pub date: DateTime<Utc>,
}

/// Record accepted by the `exercises` table
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewExercise {
    pub user_id: Uuid,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(range(min = 1, message = "duration must be at least 1 minute"))]
    pub duration: i64,
    /// Defaults to the insertion time when absent
    pub date: Option<DateTime<Utc>>,
}

impl SchemaFields for NewExercise {
    const FIELDS: &'static [&'static str] = &["user_id", "description", "duration", "date"];
}

/// A scalar body field that may arrive as a JSON number or as text.
///
/// Form posts always carry text; JSON clients may send numbers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScalarInput {
    Number(f64),
    Text(String),
}

impl ScalarInput {
    /// True for text that is empty once trimmed
    pub fn is_blank(&self) -> bool {
        matches!(self, ScalarInput::Text(s) if s.trim().is_empty())
    }
}

impl From<&str> for ScalarInput {
    fn from(s: &str) -> Self {
        ScalarInput::Text(s.to_string())
    }
}

impl From<i64> for ScalarInput {
    fn from(n: i64) -> Self {
        ScalarInput::Number(n as f64)
    }
}

/// Exercise creation request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct NewExerciseRequest {
    /// What was done
    #[schema(example = "running")]
    pub description: Option<String>,
    /// Minutes, as a number or numeric text
    #[schema(value_type = Option<String>, example = "30")]
    pub duration: Option<ScalarInput>,
    /// Calendar date or timestamp; defaults to now
    #[schema(value_type = Option<String>, example = "2024-01-15")]
    pub date: Option<ScalarInput>,
}

/// Query parameters of the exercise log endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LogQuery {
    /// Earliest date to include (inclusive)
    #[param(example = "2024-01-01")]
    pub from: Option<String>,
    /// Latest date to include (inclusive)
    #[param(example = "2024-01-31")]
    pub to: Option<String>,
    /// Maximum number of entries; 0 means unlimited
    #[param(example = "10")]
    pub limit: Option<String>,
}

/// Store query for a user's exercise log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFilter {
    pub user_id: Uuid,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// `None` means unlimited
    pub limit: Option<u64>,
}

impl LogFilter {
    /// Filter with no date bounds and no limit
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            to: None,
            limit: None,
        }
    }
}

/// A stored exercise together with its owner
#[derive(Debug, Clone)]
pub struct LoggedExercise {
    pub user: User,
    pub exercise: Exercise,
}

/// A user's filtered, date-ordered exercises
#[derive(Debug, Clone)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<Exercise>,
}

/// Response for a newly added exercise
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExerciseResponse {
    /// Owner's user id
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "jane_doe")]
    pub username: String,
    #[schema(example = "running")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: i64,
    /// Calendar date
    #[schema(example = "Mon Jan 15 2024")]
    pub date: String,
}

impl From<LoggedExercise> for ExerciseResponse {
    fn from(logged: LoggedExercise) -> Self {
        Self {
            id: logged.user.id,
            username: logged.user.username,
            description: logged.exercise.description,
            duration: logged.exercise.duration,
            date: format_calendar_date(&logged.exercise.date),
        }
    }
}

/// One entry of an exercise log
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogEntry {
    #[schema(example = "running")]
    pub description: String,
    #[schema(example = 30)]
    pub duration: i64,
    #[schema(example = "Mon Jan 15 2024")]
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            date: format_calendar_date(&exercise.date),
            description: exercise.description,
            duration: exercise.duration,
        }
    }
}

/// Response for an exercise log query
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[schema(example = "jane_doe")]
    pub username: String,
    /// Number of entries returned
    pub count: usize,
    pub log: Vec<LogEntry>,
}

impl From<ExerciseLog> for LogResponse {
    fn from(log: ExerciseLog) -> Self {
        let entries: Vec<LogEntry> = log.entries.into_iter().map(LogEntry::from).collect();
        Self {
            id: log.user.id,
            username: log.user.username,
            count: entries.len(),
            log: entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn user() -> User {
        User::new(Uuid::new_v4(), "jane".to_string())
    }

    #[test]
    fn test_log_response_counts_entries() {
        let owner = user();
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap();
        let entries = (1..=3)
            .map(|i| Exercise {
                id: Uuid::new_v4(),
                user_id: owner.id,
                description: format!("lap {}", i),
                duration: i,
                date,
            })
            .collect();

        let response = LogResponse::from(ExerciseLog { user: owner.clone(), entries });

        assert_eq!(response.count, 3);
        assert_eq!(response.id, owner.id);
        assert_eq!(response.log[0].date, "Mon Jan 01 2024");
    }

    #[test]
    fn test_scalar_input_from_json_and_text() {
        let number: ScalarInput = serde_json::from_str("30").unwrap();
        let text: ScalarInput = serde_json::from_str("\"30\"").unwrap();

        assert_eq!(number, ScalarInput::Number(30.0));
        assert_eq!(text, ScalarInput::Text("30".to_string()));
        assert!(ScalarInput::from("  ").is_blank());
        assert!(!ScalarInput::from(0).is_blank());
    }

    #[test]
    fn test_exercise_response_uses_owner_id() {
        let owner = user();
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: owner.id,
            description: "swim".to_string(),
            duration: 45,
            date: Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap(),
        };

        let response = ExerciseResponse::from(LoggedExercise { user: owner.clone(), exercise });
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["_id"], owner.id.to_string());
        assert_eq!(json["date"], "Sun Dec 31 2023");
        assert_eq!(json["duration"], 45);
    }
}
