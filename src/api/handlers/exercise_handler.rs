//! Exercise handlers.

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::api::extractors::FormOrJson;
use crate::api::AppState;
use crate::domain::{ExerciseResponse, LogQuery, LogResponse, NewExerciseRequest};
use crate::errors::AppResult;

/// Bytes escaped when a decoded id is put back into a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Log an exercise for a user
#[utoipa::path(
    post,
    path = "/api/users/{_id}/exercises",
    tag = "Exercises",
    params(("_id" = String, Path, description = "User ID")),
    request_body(
        content = NewExerciseRequest,
        content_type = "application/x-www-form-urlencoded",
        description = "Also accepted as application/json"
    ),
    responses(
        (status = 200, description = "Exercise logged", body = ExerciseResponse),
        (status = 400, description = "Invalid input", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn add_exercise(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    FormOrJson(payload): FormOrJson<NewExerciseRequest>,
) -> AppResult<Json<ExerciseResponse>> {
    let logged = state
        .exercise_service
        .add_exercise(&user_id, payload)
        .await?;

    Ok(Json(ExerciseResponse::from(logged)))
}

/// Send browsers that GET the exercise form target to the log
#[utoipa::path(
    get,
    path = "/api/users/{_id}/exercises",
    tag = "Exercises",
    params(("_id" = String, Path, description = "User ID")),
    responses(
        (status = 302, description = "Redirect to the user's exercise log")
    )
)]
pub async fn redirect_to_logs(Path(user_id): Path<String>) -> impl IntoResponse {
    let user_id = utf8_percent_encode(&user_id, PATH_SEGMENT);

    // axum's Redirect only offers 303/307/308
    (
        StatusCode::FOUND,
        [(header::LOCATION, format!("/api/users/{}/logs", user_id))],
    )
}

/// Get a user's exercise log
#[utoipa::path(
    get,
    path = "/api/users/{_id}/logs",
    tag = "Exercises",
    params(("_id" = String, Path, description = "User ID"), LogQuery),
    responses(
        (status = 200, description = "Exercise log", body = LogResponse),
        (status = 400, description = "Invalid query", body = crate::errors::ErrorResponse),
        (status = 404, description = "User not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_log(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(query): Query<LogQuery>,
) -> AppResult<Json<LogResponse>> {
    let log = state.exercise_service.get_log(&user_id, query).await?;

    Ok(Json(LogResponse::from(log)))
}
