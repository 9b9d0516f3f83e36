pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{delete, get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/projects/{project_id}/tickets/{ticket_id}/comments",
            post(handlers::create_comment),
        )
        .route(
            "/projects/{project_id}/tickets/{ticket_id}/comments",
            get(handlers::list_comments),
        )
        .route(
            "/projects/{project_id}/tickets/{ticket_id}/comments/{comment_id}",
            delete(handlers::delete_comment),
        )
}
