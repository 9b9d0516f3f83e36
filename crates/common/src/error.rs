use thiserror::Error;

#[derive(Debug, Error)]
pub enum TicketryError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("database error: {0}")]
    Database(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("access denied: {0}")]
    Denied(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("already deleted: {0}")]
    AlreadyDeleted(String),
}

pub type TicketryResult<T> = Result<T, TicketryError>;
