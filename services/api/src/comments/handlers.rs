use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ticketry_db::authz::models::{WorkspaceScope, READ_ROLES, WRITE_ROLES};
use ticketry_db::authz::repositories::AuthzRepository;
use ticketry_db::comment::models::CommentFilter;
use ticketry_db::comment::repositories::CommentRepository;
use uuid::Uuid;

use crate::comments::requests::CreateCommentRequest;
use crate::comments::responses::{CommentResponse, ListCommentsResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<CreateCommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), WRITE_ROLES)
        .await?;

    let comment = state
        .comment_repo
        .create(project_id, ticket_id, user, &req.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into())))
}

pub async fn delete_comment(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id, comment_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), WRITE_ROLES)
        .await?;

    state
        .comment_repo
        .delete(ticket_id, comment_id, user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_comments(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id)): Path<(Uuid, Uuid)>,
    Query(filter): Query<CommentFilter>,
) -> Result<Json<ListCommentsResponse>, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), READ_ROLES)
        .await?;

    let page = state
        .comment_repo
        .list(project_id, ticket_id, filter)
        .await?;
    let data: Vec<CommentResponse> = page.items.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ListCommentsResponse {
        data,
        count,
        next_cursor: page.next_cursor,
    }))
}
