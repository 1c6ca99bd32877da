//! In-memory implementation of UserStore

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::{debug, instrument};

use shop_core::entities::User;
use shop_core::traits::{StoreResult, UserStore};
use shop_core::ResourceId;

use crate::sequence::IdSequence;

/// In-memory implementation of UserStore
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: DashMap<ResourceId, User>,
    sequence: IdSequence,
}

impl MemoryUserStore {
    /// Create a new, empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    #[instrument(skip(self, user))]
    async fn save(&self, mut user: User) -> StoreResult<User> {
        let id = match user.id {
            Some(id) => {
                self.sequence.observe(id);
                id
            }
            None => self.sequence.next(),
        };
        user.id = Some(id);

        self.users.insert(id, user.clone());
        debug!(user_id = %id, "User saved");

        Ok(user)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: ResourceId) -> StoreResult<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.clone()))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> StoreResult<Vec<User>> {
        Ok(self.users.iter().map(|entry| entry.clone()).collect())
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: ResourceId) -> StoreResult<()> {
        // Deleting an absent id is a no-op
        if self.users.remove(&id).is_some() {
            debug!(user_id = %id, "User deleted");
        }
        Ok(())
    }
}
