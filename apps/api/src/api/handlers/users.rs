use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::state::AppState;
use crate::domain::user::{CreateUserRequest, JsonObject, UpdateUserRequest, User, UserError};

// Extractor rejections are taken as values so that a bad identifier or body
// still produces the `{"error": ...}` envelope.

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<JsonObject<CreateUserRequest>>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(JsonObject(req)) = payload?;
    let user = state.users.create(req).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let user = state.users.get_by_id(id).await?;

    Ok(Json(user))
}

/// List all users
///
/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state.users.list().await.map_err(|e| match e {
        UserError::Storage(cause) => {
            tracing::error!(error = %cause, "failed to list users");
            ApiError::internal_server_error("failed to list users")
        }
        other => ApiError::from(other),
    })?;

    Ok(Json(users))
}

/// Apply a partial update to a user
///
/// PUT /users/:id and PATCH /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<JsonObject<UpdateUserRequest>>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id?;
    let Json(JsonObject(req)) = payload?;
    let user = state.users.update(id, req).await?;

    Ok(Json(user))
}

/// Delete a user
///
/// DELETE /users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.users.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
