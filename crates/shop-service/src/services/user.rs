//! User service

use shop_core::entities::User;
use shop_core::ResourceId;
use tracing::{debug, info, instrument};

use crate::dto::UserTransfer;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Persist a new user; the store assigns identity if absent
    #[instrument(skip(self, transfer))]
    pub async fn save(&self, transfer: UserTransfer) -> ServiceResult<UserTransfer> {
        let saved = self.ctx.user_store().save(User::from(transfer)).await?;
        info!(user_id = ?saved.id, "User saved");

        Ok(UserTransfer::from(saved))
    }

    /// Persist changes to a user whose identity is expected to exist
    #[instrument(skip(self, transfer))]
    pub async fn update(&self, transfer: UserTransfer) -> ServiceResult<UserTransfer> {
        let saved = self.ctx.user_store().save(User::from(transfer)).await?;
        info!(user_id = ?saved.id, "User updated");

        Ok(UserTransfer::from(saved))
    }

    /// Look up a user, failing with NotFound when the store has no record
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: ResourceId) -> ServiceResult<UserTransfer> {
        debug!(user_id = %id, "User lookup");

        let user = self
            .ctx
            .user_store()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", id.to_string()))?;

        Ok(UserTransfer::from(user))
    }

    /// List all users; an empty store yields an empty collection
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> ServiceResult<Vec<UserTransfer>> {
        let users = self.ctx.user_store().find_all().await?;

        Ok(users.into_iter().map(UserTransfer::from).collect())
    }

    /// Delete a user; an absent id is not an error
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: ResourceId) -> ServiceResult<()> {
        self.ctx.user_store().delete_by_id(id).await?;
        info!(user_id = %id, "User deleted");

        Ok(())
    }
}
