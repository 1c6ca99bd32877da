//! In-memory implementation of ProductStore

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use shop_core::entities::Product;
use shop_core::traits::{ProductStore, StoreResult};
use shop_core::ResourceId;

use crate::sequence::IdSequence;

/// In-memory implementation of ProductStore
#[derive(Debug, Default)]
pub struct MemoryProductStore {
    products: DashMap<ResourceId, Product>,
    sequence: IdSequence,
}

impl MemoryProductStore {
    /// Create a new, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    #[instrument(skip(self, product))]
    async fn save(&self, mut product: Product) -> StoreResult<Product> {
        let id = match product.id {
            Some(id) => {
                self.sequence.observe(id);
                id
            }
            None => self.sequence.next(),
        };
        product.id = Some(id);

        self.products.insert(id, product.clone());
        debug!(product_id = %id, "Product saved");

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<Product>> {
        Ok(self.products.get(&id).map(|entry| entry.clone()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<Product>> {
        Ok(self.products.iter().map(|entry| entry.clone()).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        // Deleting an absent id is a no-op
        if self.products.remove(&id).is_some() {
            debug!(product_id = %id, "Product deleted");
        }
        Ok(())
    }
}
