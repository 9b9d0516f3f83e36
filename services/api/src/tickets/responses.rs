use chrono::{DateTime, Utc};
use serde::Serialize;
use ticketry_db::ticket::models::{StatusChange, Ticket};
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: Uuid,
    pub content: String,
    pub project_id: Uuid,
    pub created_by: Uuid,
    pub status: String,
    pub assigned_to: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            content: ticket.content,
            project_id: ticket.project_id,
            created_by: ticket.created_by,
            status: ticket.status.as_str().to_owned(),
            assigned_to: ticket.assigned_to,
            created_at: ticket.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListTicketsResponse {
    pub data: Vec<TicketResponse>,
    pub count: usize,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct StatusChangeResponse {
    pub status: String,
    pub updated_by: Uuid,
    pub updated_at: DateTime<Utc>,
}

impl From<StatusChange> for StatusChangeResponse {
    fn from(change: StatusChange) -> Self {
        Self {
            status: change.status.as_str().to_owned(),
            updated_by: change.updated_by,
            updated_at: change.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketHistoryResponse {
    pub data: Vec<StatusChangeResponse>,
    pub count: usize,
}
