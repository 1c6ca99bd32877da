//! # shop-service
//!
//! Application layer containing resource services and DTOs.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CartTransfer, CategoryTransfer, CollectionResponse, CredentialTransfer, HealthResponse,
    OrderTransfer, ProductTransfer, UserTransfer,
};
pub use services::{
    OrderService, ProductService, ServiceContext, ServiceError, ServiceResult, UserService,
};
