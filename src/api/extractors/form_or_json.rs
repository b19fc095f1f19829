//! Body extractor accepting both JSON and URL-encoded form posts.

use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Form, Json,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Request body decoded from `application/json` or
/// `application/x-www-form-urlencoded`.
///
/// Anything that is not JSON goes through axum's `Form`, which rejects a
/// missing or non-form content type; that rejection is a validation error.
///
/// # Example
///
/// ```rust,ignore
/// use exercise_tracker::api::extractors::FormOrJson;
/// use exercise_tracker::domain::CreateUserRequest;
///
/// async fn create_user(FormOrJson(payload): FormOrJson<CreateUserRequest>) {
///     // payload came from either an HTML form or a JSON client
/// }
/// ```
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            return Ok(FormOrJson(value));
        }

        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| rejection_message(e.status(), e.body_text()))?;

        Ok(FormOrJson(value))
    }
}

fn is_json(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim_start().starts_with("application/json"))
        .unwrap_or(false)
}

/// Body-read failures are server side; everything else is bad input.
fn rejection_message(status: StatusCode, body: String) -> AppError {
    if status.is_server_error() {
        AppError::internal(body)
    } else {
        AppError::validation(body)
    }
}
