//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on repository traits, never on
//! concrete stores.

pub mod container;
mod exercise_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use exercise_service::{ExerciseManager, ExerciseService};
pub use user_service::{UserManager, UserService};
