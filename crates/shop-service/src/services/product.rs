//! Product service

use shop_core::entities::Product;
use shop_core::ResourceId;
use tracing::{debug, info, instrument};

use crate::dto::ProductTransfer;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Product service
pub struct ProductService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProductService<'a> {
    /// Create a new ProductService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a new product; the store assigns identity if absent
    #[instrument(skip(self, transfer))]
    pub async fn save(&self, transfer: ProductTransfer) -> ServiceResult<ProductTransfer> {
        let saved = self
            .ctx
            .product_store()
            .save(Product::from(transfer))
            .await?;
        info!(product_id = ?saved.id, "Product saved");

        Ok(ProductTransfer::from(saved))
    }

    /// Persist changes to a product whose identity is expected to exist
    #[instrument(skip(self, transfer))]
    pub async fn update(&self, transfer: ProductTransfer) -> ServiceResult<ProductTransfer> {
        let saved = self
            .ctx
            .product_store()
            .save(Product::from(transfer))
            .await?;
        info!(product_id = ?saved.id, "Product updated");

        Ok(ProductTransfer::from(saved))
    }

    /// Look up a product, failing with NotFound when the store has no record
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ResourceId) -> ServiceResult<ProductTransfer> {
        debug!(product_id = %id, "Product lookup");

        let product = self
            .ctx
            .product_store()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Product", id.to_string()))?;

        Ok(ProductTransfer::from(product))
    }

    /// List all products; an empty store yields an empty collection
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<ProductTransfer>> {
        let products = self.ctx.product_store().find_all().await?;

        Ok(products.into_iter().map(ProductTransfer::from).collect())
    }

    /// Delete a product; an absent id is not an error
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ResourceId) -> ServiceResult<()> {
        self.ctx.product_store().delete_by_id(id).await?;
        info!(product_id = %id, "Product deleted");

        Ok(())
    }
}
