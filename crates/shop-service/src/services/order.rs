//! Order service
//!
//! CRUD operations over the order store, with existence enforced only by
//! `find_by_id`.

use shop_core::entities::Order;
use shop_core::ResourceId;
use tracing::{debug, info, instrument};

use crate::dto::OrderTransfer;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    /// Create a new OrderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a new order; the store assigns identity if absent
    #[instrument(skip(self, transfer))]
    pub async fn save(&self, transfer: OrderTransfer) -> ServiceResult<OrderTransfer> {
        let saved = self.ctx.order_store().save(Order::from(transfer)).await?;
        info!(order_id = ?saved.id, "Order saved");

        Ok(OrderTransfer::from(saved))
    }

    /// Persist changes to an order whose identity is expected to exist
    #[instrument(skip(self, transfer))]
    pub async fn update(&self, transfer: OrderTransfer) -> ServiceResult<OrderTransfer> {
        let saved = self.ctx.order_store().save(Order::from(transfer)).await?;
        info!(order_id = ?saved.id, "Order updated");

        Ok(OrderTransfer::from(saved))
    }

    /// Look up an order, failing with NotFound when the store has no record
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ResourceId) -> ServiceResult<OrderTransfer> {
        debug!(order_id = %id, "Order lookup");

        let order = self
            .ctx
            .order_store()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", id.to_string()))?;

        Ok(OrderTransfer::from(order))
    }

    /// List all orders; an empty store yields an empty collection
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<OrderTransfer>> {
        let orders = self.ctx.order_store().find_all().await?;

        Ok(orders.into_iter().map(OrderTransfer::from).collect())
    }

    /// Delete an order; an absent id is not an error
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ResourceId) -> ServiceResult<()> {
        self.ctx.order_store().delete_by_id(id).await?;
        info!(order_id = %id, "Order deleted");

        Ok(())
    }
}
