use async_trait::async_trait;
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::authz::models::{Role, WorkspaceScope};

#[async_trait]
pub trait AuthzRepository: Send + Sync {
    /// Resolve the active role of `user_id` within the workspace the scope
    /// points at. `Denied` when there is no active membership; `NotFound`
    /// when a project scope names a project that does not exist.
    async fn resolve_role(&self, user_id: Uuid, scope: WorkspaceScope) -> TicketryResult<Role>;

    /// Resolve and check against an explicit allowed set.
    async fn require_role(
        &self,
        user_id: Uuid,
        scope: WorkspaceScope,
        allowed: &[Role],
    ) -> TicketryResult<Role> {
        let role = self.resolve_role(user_id, scope).await?;
        if !allowed.contains(&role) {
            return Err(TicketryError::Denied(
                "insufficient permissions for this workspace".to_owned(),
            ));
        }
        Ok(role)
    }
}
