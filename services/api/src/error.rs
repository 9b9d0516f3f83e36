use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use ticketry_common::error::TicketryError;

pub struct ApiError(pub TicketryError);

impl From<TicketryError> for ApiError {
    fn from(err: TicketryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            TicketryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            TicketryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TicketryError::Denied(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            TicketryError::Conflict(msg) => (StatusCode::CONFLICT, msg.clone()),
            err @ TicketryError::InvalidTransition { .. } => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            err @ TicketryError::AlreadyDeleted(_) => (StatusCode::BAD_REQUEST, err.to_string()),
            other => {
                // Store internals stay out of response bodies.
                tracing::error!(error = %other, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}
