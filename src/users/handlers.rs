use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{
    error::AppError,
    state::AppState,
    users::dto::{UserFilters, UserPayload, UserResponse},
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/add-user", post(add_user))
        .route("/users", get(list_users))
        .route("/users/:id", put(update_user))
}

/// Decodes the body as JSON whatever the Content-Type header says.
fn decode_payload(body: &[u8]) -> Result<UserPayload, AppError> {
    Ok(serde_json::from_slice(body)?)
}

#[instrument(skip(state, body))]
pub async fn add_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let payload = decode_payload(&body)?;
    let id = Uuid::new_v4();
    state
        .users
        .insert(id, &payload)
        .await
        .map_err(|e| AppError::storage("Failed to create user", e))?;

    info!(user_id = %id, "user created");
    Ok((StatusCode::CREATED, "User created"))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let filters = UserFilters::from_pairs(pairs);
    let rows = state
        .users
        .list(&filters)
        .await
        .map_err(|e| AppError::storage("Failed to retrieve users", e))?;

    debug!(count = rows.len(), "users listed");
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

#[instrument(skip(state, body))]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, &'static str), AppError> {
    let id = Uuid::parse_str(&id)?;
    let payload = decode_payload(&body)?;
    let affected = state
        .users
        .update(id, &payload)
        .await
        .map_err(|e| AppError::storage("Failed to update user", e))?;

    // Zero rows is still a success.
    debug!(user_id = %id, affected, "user update applied");
    Ok((StatusCode::OK, "User updated"))
}
