//! Resource services
//!
//! This module contains the service layer implementations that orchestrate
//! stores and mappers, and enforce lookup/existence semantics.

pub mod context;
pub mod error;
pub mod order;
pub mod product;
pub mod user;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use order::OrderService;
pub use product::ProductService;
pub use user::UserService;
