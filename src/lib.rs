//! Exercise Tracker - A small REST service for logging exercises
//!
//! Users are created by username; each user logs exercises (description,
//! duration in minutes, date) and queries them back filtered by date range
//! and limited in count.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, request and response shapes
//! - **services**: Input validation and use cases
//! - **infra**: Database connection, migrations and repositories
//! - **api**: HTTP handlers, extractors, static files and routes
//! - **utils**: Date and number parsing helpers
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! DATABASE_URL=sqlite://tracker.db?mode=rwc cargo run -- serve --port 3000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use domain::{Exercise, User};
pub use errors::{AppError, AppResult};
pub use infra::Database;
