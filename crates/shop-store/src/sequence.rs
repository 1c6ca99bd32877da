//! Identity sequence for in-memory stores
//!
//! Hands out fresh resource ids and observes explicit client-supplied ids
//! so later assignments never collide with a taken id.

use std::sync::atomic::{AtomicI32, Ordering};

use shop_core::ResourceId;

/// Thread-safe monotonic id sequence
#[derive(Debug)]
pub struct IdSequence {
    last: AtomicI32,
}

impl IdSequence {
    /// Create a new sequence; the first id handed out is 1
    #[must_use]
    pub fn new() -> Self {
        Self {
            last: AtomicI32::new(0),
        }
    }

    /// Hand out the next unused id
    pub fn next(&self) -> ResourceId {
        ResourceId::new(self.last.fetch_add(1, Ordering::Relaxed) + 1)
    }

    /// Record an explicitly assigned id so `next` never re-issues it
    pub fn observe(&self, id: ResourceId) {
        self.last.fetch_max(id.into_inner(), Ordering::Relaxed);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
