//! In-memory store implementations
//!
//! One concurrent table per resource type, all sharing the same shape:
//! save assigns identity when unset and upserts, find/delete are
//! entry-level atomic, absence is `Ok(None)`.

mod order;
mod product;
mod user;

pub use order::MemoryOrderStore;
pub use product::MemoryProductStore;
pub use user::MemoryUserStore;
