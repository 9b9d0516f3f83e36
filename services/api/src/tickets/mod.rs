pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{delete, get, patch, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/tickets",
            post(handlers::create_ticket),
        )
        .route("/projects/{project_id}/tickets", get(handlers::list_tickets))
        .route(
            "/projects/{project_id}/tickets/{ticket_id}/status",
            patch(handlers::update_ticket_status),
        )
        .route(
            "/projects/{project_id}/tickets/{ticket_id}",
            delete(handlers::delete_ticket),
        )
        .route(
            "/projects/{project_id}/tickets/{ticket_id}/history",
            get(handlers::ticket_history),
        )
}
