//! Resource ID - numeric identity assigned by the store
//!
//! Serializes as a plain JSON number on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned numeric identity for a resource
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(i32);

impl ResourceId {
    /// Create a new ResourceId from a raw i32 value
    #[inline]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the inner i32 value
    #[inline]
    pub const fn into_inner(self) -> i32 {
        self.0
    }

    /// Parse from string representation
    pub fn parse(s: &str) -> Result<Self, ResourceIdParseError> {
        s.parse::<i32>()
            .map(ResourceId)
            .map_err(|_| ResourceIdParseError::InvalidFormat)
    }
}

/// Error when parsing a ResourceId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResourceIdParseError {
    #[error("invalid resource id format")]
    InvalidFormat,
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ResourceId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ResourceId> for i32 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl std::str::FromStr for ResourceId {
    type Err = ResourceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceId::parse(s)
    }
}
