//! # shop-core
//!
//! Domain layer containing entities, value objects, and store traits.
//! This crate has zero dependencies on infrastructure (web framework, storage adapters, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Cart, Category, Credential, Order, Product, User};
pub use error::DomainError;
pub use traits::{OrderStore, ProductStore, StoreResult, UserStore};
pub use value_objects::{ResourceId, ResourceIdParseError};
