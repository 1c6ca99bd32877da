//! Response envelopes for API endpoints
//!
//! Collection results are always wrapped, never returned as a bare sequence.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Collection response wrapper
#[derive(Debug, Serialize)]
pub struct CollectionResponse<T> {
    pub collection: Vec<T>,
}

impl<T> CollectionResponse<T> {
    pub fn new(collection: Vec<T>) -> Self {
        Self { collection }
    }
}

impl<T> From<Vec<T>> for CollectionResponse<T> {
    fn from(collection: Vec<T>) -> Self {
        Self::new(collection)
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
        }
    }
}
