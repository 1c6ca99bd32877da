//! User handlers
//!
//! CRUD endpoints for users under /api/users.

use axum::{
    extract::{Path, State},
    Json,
};
use shop_service::{CollectionResponse, UserService, UserTransfer};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// Create a user
///
/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(transfer): ValidatedJson<UserTransfer>,
) -> ApiResult<Json<UserTransfer>> {
    let service = UserService::new(state.service_context());
    let saved = service.save(transfer).await?;
    Ok(Json(saved))
}

/// Get a user by ID
///
/// GET /api/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserTransfer>> {
    let id = parse_id(&id)?;

    let service = UserService::new(state.service_context());
    let user = service.find_by_id(id).await?;
    Ok(Json(user))
}

/// Update a user
///
/// PUT /api/users/{id}
///
/// The path id is authoritative; it is stamped onto the body before the update.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut transfer): ValidatedJson<UserTransfer>,
) -> ApiResult<Json<UserTransfer>> {
    transfer.user_id = Some(parse_id(&id)?);

    let service = UserService::new(state.service_context());
    let updated = service.update(transfer).await?;
    Ok(Json(updated))
}

/// Delete a user
///
/// DELETE /api/users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<bool>> {
    let id = parse_id(&id)?;

    let service = UserService::new(state.service_context());
    service.delete_by_id(id).await?;
    Ok(Json(true))
}

/// List all users
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionResponse<UserTransfer>>> {
    let service = UserService::new(state.service_context());
    let users = service.find_all().await?;
    Ok(Json(CollectionResponse::new(users)))
}
