//! Store traits (ports) - define the interface for persistence
//!
//! The domain layer defines what it needs, and the adapter layer provides
//! the implementation. The store is the sole source of truth for existence:
//! absence is `Ok(None)`, never an error, and deleting an absent id is a no-op.

use async_trait::async_trait;

use crate::entities::{Order, Product, User};
use crate::error::DomainError;
use crate::value_objects::ResourceId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, DomainError>;

// ============================================================================
// Order Store
// ============================================================================

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist an order; assigns identity if unset, otherwise overwrites
    async fn save(&self, order: Order) -> StoreResult<Order>;

    /// Find order by ID
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<Order>>;

    /// List all orders (order undefined)
    async fn find_all(&self) -> StoreResult<Vec<Order>>;

    /// Delete order by ID
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()>;
}

// ============================================================================
// Product Store
// ============================================================================

#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist a product; assigns identity if unset, otherwise overwrites
    async fn save(&self, product: Product) -> StoreResult<Product>;

    /// Find product by ID
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<Product>>;

    /// List all products (order undefined)
    async fn find_all(&self) -> StoreResult<Vec<Product>>;

    /// Delete product by ID
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()>;
}

// ============================================================================
// User Store
// ============================================================================

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a user; assigns identity if unset, otherwise overwrites
    async fn save(&self, user: User) -> StoreResult<User>;

    /// Find user by ID
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<User>>;

    /// List all users (order undefined)
    async fn find_all(&self) -> StoreResult<Vec<User>>;

    /// Delete user by ID
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()>;
}
