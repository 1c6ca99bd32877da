//! Route handlers
//!
//! All HTTP request handlers organized by resource.

pub mod health;
pub mod orders;
pub mod products;
pub mod users;

use shop_core::ResourceId;

use crate::response::ApiError;

/// Parse a path segment into a ResourceId, rejecting non-numeric input
pub(crate) fn parse_id(raw: &str) -> Result<ResourceId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::invalid_path(format!("Invalid id: {raw}")))
}
