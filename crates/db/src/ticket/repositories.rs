use async_trait::async_trait;
use ticketry_common::error::TicketryResult;
use uuid::Uuid;

use crate::pagination::Page;
use crate::ticket::models::{StatusChange, Ticket, TicketFilter, TicketStatus};

#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Insert a ticket as `open` with its initial history row and audit
    /// entry, as one atomic unit.
    async fn create(
        &self,
        project_id: Uuid,
        creator: Uuid,
        content: &str,
        assigned_to: Option<Uuid>,
    ) -> TicketryResult<Ticket>;

    /// Move a ticket one step along the lifecycle. Locks the row, so
    /// concurrent transitions of the same ticket serialize and each is
    /// evaluated against committed state.
    async fn transition(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        actor: Uuid,
        new_status: TicketStatus,
    ) -> TicketryResult<Ticket>;

    /// Mark a ticket deleted without removing the row. Orthogonal to the
    /// status machine; valid from any status, exactly once.
    async fn soft_delete(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        actor: Uuid,
    ) -> TicketryResult<()>;

    /// Live tickets of a project, newest-first, keyset-paginated.
    async fn list(&self, project_id: Uuid, filter: TicketFilter) -> TicketryResult<Page<Ticket>>;

    /// Full status timeline of a ticket, newest-first.
    async fn history(&self, project_id: Uuid, ticket_id: Uuid)
        -> TicketryResult<Vec<StatusChange>>;
}
