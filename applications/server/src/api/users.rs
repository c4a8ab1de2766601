/// Users and leaderboard API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use storyboard_core::{validate_new_user, FieldError, User};

/// GET / , /leaderboard , /users
/// The full leaderboard, ordered by story_count descending
pub async fn leaderboard(State(app_state): State<AppState>) -> Result<Json<Vec<User>>> {
    let users = app_state.store.list_by_story_count().await?;
    Ok(Json(users))
}

/// POST /users
/// Create a user from an untyped JSON payload
///
/// The body is parsed by hand so a malformed payload becomes a field-level
/// validation error rather than an extractor rejection.
pub async fn create_user(State(app_state): State<AppState>, body: Bytes) -> Result<StatusCode> {
    let payload: Value = serde_json::from_slice(&body).map_err(|_| {
        ServerError::Validation(vec![FieldError {
            field: "body".to_string(),
            reason: "malformed JSON".to_string(),
        }])
    })?;

    let new_user = validate_new_user(&payload).map_err(ServerError::Validation)?;

    app_state.store.create(&new_user).await?;

    Ok(StatusCode::CREATED)
}

/// GET /users/:id
/// Fetch a single user by chat-platform id
pub async fn get_user(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<User>> {
    let user = app_state
        .store
        .get(&id)
        .await?
        .ok_or(ServerError::NotFound)?;

    Ok(Json(user))
}

/// PUT /users/:id
/// Declared but intentionally unimplemented; update semantics were never
/// defined upstream, so this responds 501 instead of silently succeeding.
pub async fn update_user(Path(_id): Path<String>) -> Result<StatusCode> {
    Err(ServerError::NotImplemented)
}
