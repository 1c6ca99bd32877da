//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ResourceId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Order not found: {0}")]
    OrderNotFound(ResourceId),

    #[error("Product not found: {0}")]
    ProductNotFound(ResourceId),

    #[error("User not found: {0}")]
    UserNotFound(ResourceId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Store error: {0}")]
    StoreError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",
            Self::ProductNotFound(_) => "UNKNOWN_PRODUCT",
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::StoreError(_) => "STORE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::OrderNotFound(_) | Self::ProductNotFound(_) | Self::UserNotFound(_)
        )
    }
}
