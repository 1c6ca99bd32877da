//! In-memory implementation of OrderStore

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use shop_core::entities::Order;
use shop_core::traits::{OrderStore, StoreResult};
use shop_core::ResourceId;

use crate::sequence::IdSequence;

/// In-memory implementation of OrderStore
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    orders: DashMap<ResourceId, Order>,
    sequence: IdSequence,
}

impl MemoryOrderStore {
    /// Create a new, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    #[instrument(skip(self, order))]
    async fn save(&self, mut order: Order) -> StoreResult<Order> {
        let id = match order.id {
            Some(id) => {
                self.sequence.observe(id);
                id
            }
            None => self.sequence.next(),
        };
        order.id = Some(id);

        self.orders.insert(id, order.clone());
        debug!(order_id = %id, "Order saved");

        Ok(order)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<Order>> {
        Ok(self.orders.get(&id).map(|entry| entry.clone()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<Order>> {
        Ok(self.orders.iter().map(|entry| entry.clone()).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        // Deleting an absent id is a no-op
        if self.orders.remove(&id).is_some() {
            debug!(order_id = %id, "Order deleted");
        }
        Ok(())
    }
}
