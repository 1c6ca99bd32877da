//! Service context - dependency container for services
//!
//! Holds the store handles needed by the resource services.

use std::sync::Arc;

use shop_core::traits::{OrderStore, ProductStore, UserStore};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
#[derive(Clone)]
pub struct ServiceContext {
    order_store: Arc<dyn OrderStore>,
    product_store: Arc<dyn ProductStore>,
    user_store: Arc<dyn UserStore>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        order_store: Arc<dyn OrderStore>,
        product_store: Arc<dyn ProductStore>,
        user_store: Arc<dyn UserStore>,
    ) -> Self {
        Self {
            order_store,
            product_store,
            user_store,
        }
    }

    /// Get the order store
    pub fn order_store(&self) -> &dyn OrderStore {
        self.order_store.as_ref()
    }

    /// Get the product store
    pub fn product_store(&self) -> &dyn ProductStore {
        self.product_store.as_ref()
    }

    /// Get the user store
    pub fn user_store(&self) -> &dyn UserStore {
        self.user_store.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("stores", &"...")
            .finish()
    }
}
