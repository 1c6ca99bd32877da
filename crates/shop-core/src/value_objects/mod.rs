//! Value objects for the domain layer

mod resource_id;

pub use resource_id::{ResourceId, ResourceIdParseError};
