use async_trait::async_trait;
use ticketry_common::error::TicketryResult;
use uuid::Uuid;

use crate::comment::models::{Comment, CommentFilter};
use crate::pagination::Page;

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment on a live ticket, with its audit entry, atomically.
    async fn create(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        author: Uuid,
        content: &str,
    ) -> TicketryResult<Comment>;

    /// Delete a comment the actor owns. A comment that exists but belongs to
    /// someone else reports `NotFound`, indistinguishable from absence.
    async fn delete(&self, ticket_id: Uuid, comment_id: Uuid, actor: Uuid) -> TicketryResult<()>;

    /// Comments of a live ticket, newest-first, keyset-paginated.
    async fn list(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        filter: CommentFilter,
    ) -> TicketryResult<Page<Comment>>;
}
