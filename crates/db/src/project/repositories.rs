use async_trait::async_trait;
use ticketry_common::error::TicketryResult;
use uuid::Uuid;

use crate::project::models::Project;

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create(&self, workspace_id: Uuid, name: &str, creator: Uuid)
        -> TicketryResult<Project>;

    async fn list(&self, workspace_id: Uuid) -> TicketryResult<Vec<Project>>;
}
