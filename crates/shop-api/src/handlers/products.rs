//! Product handlers
//!
//! CRUD endpoints for products under /api/products.

use axum::{
    extract::{Path, State},
    Json,
};
use shop_service::{CollectionResponse, ProductService, ProductTransfer};

use crate::extractors::ValidatedJson;
use crate::response::ApiResult;
use crate::state::AppState;

use super::parse_id;

/// Create a product
///
/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(transfer): ValidatedJson<ProductTransfer>,
) -> ApiResult<Json<ProductTransfer>> {
    let service = ProductService::new(state.service_context());
    let saved = service.save(transfer).await?;
    Ok(Json(saved))
}

/// Get a product by ID
///
/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProductTransfer>> {
    let id = parse_id(&id)?;

    let service = ProductService::new(state.service_context());
    let product = service.find_by_id(id).await?;
    Ok(Json(product))
}

/// Update a product
///
/// PUT /api/products/{id}
///
/// The path id is authoritative; it is stamped onto the body before the update.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(mut transfer): ValidatedJson<ProductTransfer>,
) -> ApiResult<Json<ProductTransfer>> {
    transfer.product_id = Some(parse_id(&id)?);

    let service = ProductService::new(state.service_context());
    let updated = service.update(transfer).await?;
    Ok(Json(updated))
}

/// Delete a product
///
/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<bool>> {
    let id = parse_id(&id)?;

    let service = ProductService::new(state.service_context());
    service.delete_by_id(id).await?;
    Ok(Json(true))
}

/// List all products
///
/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> ApiResult<Json<CollectionResponse<ProductTransfer>>> {
    let service = ProductService::new(state.service_context());
    let products = service.find_all().await?;
    Ok(Json(CollectionResponse::new(products)))
}
