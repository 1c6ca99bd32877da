//! Order handlers
//!
//! CRUD endpoints for orders under /api/orders.

use axum::{
    extract::{Path, State},
    Json,
};
use shop_service::{CollectionResponse, OrderService, OrderTransfer};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// Create an order
///
/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    ValidatedJson(transfer): ValidatedJson<OrderTransfer>,
) -> ApiResult<Json<OrderTransfer>> {
    let service = OrderService::new(state.service_context());
    let saved = service.save(transfer).await?;
    Ok(Json(saved))
}

/// Get an order by ID
///
/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<OrderTransfer>> {
    let id = parse_id(&id)?;

    let service = OrderService::new(state.service_context());
    let order = service.find_by_id(id).await?;
    Ok(Json(order))
}

/// Update an order
///
/// PUT /api/orders/{id}
///
/// The path id is authoritative; it is stamped onto the body before the update.
pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut transfer): ValidatedJson<OrderTransfer>,
) -> ApiResult<Json<OrderTransfer>> {
    transfer.order_id = Some(parse_id(&id)?);

    let service = OrderService::new(state.service_context());
    let updated = service.update(transfer).await?;
    Ok(Json(updated))
}

/// Delete an order
///
/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<bool>> {
    let id = parse_id(&id)?;

    let service = OrderService::new(state.service_context());
    service.delete_by_id(id).await?;
    Ok(Json(true))
}

/// List all orders
///
/// GET /api/orders
pub async fn list_orders(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionResponse<OrderTransfer>>> {
    let service = OrderService::new(state.service_context());
    let orders = service.find_all().await?;
    Ok(Json(CollectionResponse::new(orders)))
}
