//! Data transfer objects for the API boundary
//!
//! This module provides:
//! - Transfer DTOs with validation for resource payloads
//! - Response envelopes for collections and health checks
//! - Mappers converting between domain entities and transfers

pub mod mappers;
pub mod responses;
pub mod transfers;

// Re-export commonly used transfer types
pub use transfers::{
    CartTransfer, CategoryTransfer, CredentialTransfer, OrderTransfer, ProductTransfer,
    UserTransfer,
};

// Re-export response envelopes
pub use responses::{CollectionResponse, HealthResponse};
