//! User handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use super::exercise_handler::{add_exercise, get_log, redirect_to_logs};
use crate::api::extractors::FormOrJson;
use crate::api::AppState;
use crate::domain::{CreateUserRequest, UserResponse};
use crate::errors::AppResult;

/// Create user routes, including each user's exercise endpoints
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:_id/exercises", post(add_exercise).get(redirect_to_logs))
        .route("/:_id/logs", get(get_log))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body(
        content = CreateUserRequest,
        content_type = "application/x-www-form-urlencoded",
        description = "Also accepted as application/json"
    ),
    responses(
        (status = 200, description = "User created", body = UserResponse),
        (status = 400, description = "Username missing", body = crate::errors::ErrorResponse),
        (status = 409, description = "Username already exists", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    FormOrJson(payload): FormOrJson<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.create_user(payload.username).await?;

    Ok(Json(UserResponse::from(user)))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users", body = Vec<UserResponse>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
