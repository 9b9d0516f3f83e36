use chrono::{DateTime, Utc};
use serde::Serialize;
use ticketry_db::comment::models::Comment;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub ticket_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            ticket_id: comment.ticket_id,
            user_id: comment.user_id,
            content: comment.content,
            created_at: comment.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListCommentsResponse {
    pub data: Vec<CommentResponse>,
    pub count: usize,
    pub next_cursor: Option<String>,
}
