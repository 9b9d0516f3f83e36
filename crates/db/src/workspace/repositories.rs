use async_trait::async_trait;
use ticketry_common::error::TicketryResult;
use uuid::Uuid;

use crate::authz::models::Role;
use crate::workspace::models::{Membership, Workspace};

#[async_trait]
pub trait WorkspaceRepository: Send + Sync {
    /// Create a workspace and make the creator its admin, atomically.
    async fn create(&self, name: &str, creator: Uuid) -> TicketryResult<Workspace>;

    /// Add an active membership. Duplicate (user, workspace) pairs conflict.
    async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: Role,
        actor: Uuid,
    ) -> TicketryResult<Membership>;

    /// Soft-delete an active membership.
    async fn remove_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        actor: Uuid,
    ) -> TicketryResult<()>;
}
