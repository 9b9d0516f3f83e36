pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{delete, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workspaces", post(handlers::create_workspace))
        .route(
            "/workspaces/{workspace_id}/members",
            post(handlers::add_member),
        )
        .route(
            "/workspaces/{workspace_id}/members/{user_id}",
            delete(handlers::remove_member),
        )
}
