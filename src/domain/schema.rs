//! Schema rules applied to records before they reach the store.

use validator::Validate;

use crate::errors::{AppError, AppResult};

/// Declared field order of a stored record.
///
/// Schema violations are reported for the first failing field in this order.
pub trait SchemaFields {
    const FIELDS: &'static [&'static str];
}

/// Run the record's schema rules.
pub fn check_schema<T>(record: &T) -> AppResult<()>
where
    T: Validate + SchemaFields,
{
    record
        .validate()
        .map_err(|errors| AppError::store_validation(&errors, T::FIELDS))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::config::MSG_DURATION_TOO_SHORT;
    use crate::domain::{NewExercise, NewUser};

    fn exercise(description: &str, duration: i64) -> NewExercise {
        NewExercise {
            user_id: Uuid::new_v4(),
            description: description.to_string(),
            duration,
            date: Some(Utc::now()),
        }
    }

    #[test]
    fn test_valid_records_pass() {
        assert!(check_schema(&exercise("run", 30)).is_ok());
        assert!(check_schema(&NewUser { username: "jane".into() }).is_ok());
    }

    #[test]
    fn test_duration_below_minimum() {
        let err = check_schema(&exercise("run", 0)).unwrap_err();
        match err {
            AppError::StoreValidation { field, message } => {
                assert_eq!(field, "duration");
                assert_eq!(message, MSG_DURATION_TOO_SHORT);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_first_field_in_declared_order_is_reported() {
        // Both description and duration fail; description is declared first.
        let err = check_schema(&exercise("", -3)).unwrap_err();
        assert!(matches!(
            err,
            AppError::StoreValidation { ref field, .. } if field == "description"
        ));
    }

    #[test]
    fn test_empty_username() {
        let err = check_schema(&NewUser { username: String::new() }).unwrap_err();
        assert!(matches!(
            err,
            AppError::StoreValidation { ref field, .. } if field == "username"
        ));
    }
}
