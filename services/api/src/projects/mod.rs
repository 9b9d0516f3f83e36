pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::{get, post};
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/workspaces/{workspace_id}/projects",
            post(handlers::create_project),
        )
        .route(
            "/workspaces/{workspace_id}/projects",
            get(handlers::list_projects),
        )
}
