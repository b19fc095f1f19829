//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod exercise;
pub mod schema;
pub mod user;

pub use exercise::{
    Exercise, ExerciseLog, ExerciseResponse, LogEntry, LogFilter, LogQuery, LogResponse,
    LoggedExercise, NewExercise, NewExerciseRequest, ScalarInput,
};
pub use schema::{check_schema, SchemaFields};
pub use user::{CreateUserRequest, NewUser, User, UserResponse};
