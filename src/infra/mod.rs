//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and schema
//! - Repositories over the `users` and `exercises` tables

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{ExerciseRepository, ExerciseStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockExerciseRepository, MockUserRepository};
