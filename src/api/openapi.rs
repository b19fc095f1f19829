//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{exercise_handler, user_handler};
use crate::domain::{
    CreateUserRequest, ExerciseResponse, LogEntry, LogResponse, NewExerciseRequest, UserResponse,
};
use crate::errors::ErrorResponse;

/// OpenAPI documentation for the Exercise Tracker
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exercise Tracker",
        version = "0.1.0",
        description = "Register users, log their exercises and query exercise logs"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::create_user,
        user_handler::list_users,
        // Exercise endpoints
        exercise_handler::add_exercise,
        exercise_handler::redirect_to_logs,
        exercise_handler::get_log,
    ),
    components(
        schemas(
            CreateUserRequest,
            UserResponse,
            NewExerciseRequest,
            ExerciseResponse,
            LogEntry,
            LogResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "User registration and listing"),
        (name = "Exercises", description = "Exercise logging and log queries")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_endpoint() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/users"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/users/{_id}/exercises"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/users/{_id}/logs"));
    }
}
