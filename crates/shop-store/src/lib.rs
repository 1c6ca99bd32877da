//! # shop-store
//!
//! In-memory implementations of the `shop-core` store traits.
//! Each store keeps one concurrent table keyed by resource id plus an
//! atomic sequence for identity assignment; a single save or delete is
//! atomic at the key level.

pub mod sequence;
pub mod stores;

pub use sequence::IdSequence;
pub use stores::{MemoryOrderStore, MemoryProductStore, MemoryUserStore};
