use serde::Deserialize;
use ticketry_db::ticket::models::TicketStatus;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct CreateTicketRequest {
    pub content: String,
    pub assigned_to: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
}
