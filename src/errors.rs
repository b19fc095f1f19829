//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.
//!
//! Request-level failures (bad input, duplicate username, unknown user)
//! render as a JSON `{ "error": ... }` body. Everything that falls through to
//! the terminal handler (unmatched routes, schema violations, store and
//! internal failures) renders as plain text.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::config::{MSG_INTERNAL_ERROR, MSG_ROUTE_NOT_FOUND};

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Request input
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    // Terminal handler
    #[error("{}", MSG_ROUTE_NOT_FOUND)]
    RouteNotFound,

    /// Schema rule rejected a record before it was stored
    #[error("{message}")]
    StoreValidation { field: String, message: String },

    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Internal server error")]
    Internal(String),
}

/// JSON error body for request-level failures
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable reason
    #[schema(example = "user not found")]
    pub error: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::StoreValidation { .. } => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether the error renders as JSON rather than plain text
    fn is_request_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Conflict(_) | AppError::NotFound(_)
        )
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.user_message();

        if self.is_request_error() {
            (status, Json(ErrorResponse { error: message })).into_response()
        } else {
            // &str bodies are sent as text/plain
            (status, message).into_response()
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        AppError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        AppError::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Report the first failing field, walking `fields` in schema order.
    pub fn store_validation(errors: &ValidationErrors, fields: &[&str]) -> Self {
        let field_errors = errors.field_errors();

        let first = fields
            .iter()
            .find_map(|field| field_errors.get(*field).map(|errs| (*field, errs)));

        match first {
            Some((field, errs)) => {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref().map(|m| m.to_string()))
                    .unwrap_or_else(|| format!("{} is invalid", field));
                AppError::StoreValidation {
                    field: field.to_string(),
                    message,
                }
            }
            None => AppError::internal(format!("unexpected schema errors: {}", errors)),
        }
    }
}
