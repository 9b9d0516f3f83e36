use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ticketry_db::authz::models::{WorkspaceScope, ADMIN_ONLY};
use ticketry_db::authz::repositories::AuthzRepository;
use ticketry_db::workspace::repositories::WorkspaceRepository;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::workspaces::requests::{AddMemberRequest, CreateWorkspaceRequest};
use crate::workspaces::responses::{MembershipResponse, WorkspaceResponse};
use crate::AppState;

pub async fn create_workspace(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(req): Json<CreateWorkspaceRequest>,
) -> Result<(StatusCode, Json<WorkspaceResponse>), ApiError> {
    let workspace = state.workspace_repo.create(&req.name, user).await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkspaceResponse {
            id: workspace.id,
            name: workspace.name,
            created_at: workspace.created_at,
        }),
    ))
}

pub async fn add_member(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<AddMemberRequest>,
) -> Result<(StatusCode, Json<MembershipResponse>), ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Workspace(workspace_id), ADMIN_ONLY)
        .await?;

    let membership = state
        .workspace_repo
        .add_member(workspace_id, req.user_id, req.role, user)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MembershipResponse {
            user_id: membership.user_id,
            workspace_id: membership.workspace_id,
            role: membership.role.as_str().to_owned(),
        }),
    ))
}

pub async fn remove_member(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((workspace_id, member_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Workspace(workspace_id), ADMIN_ONLY)
        .await?;

    state
        .workspace_repo
        .remove_member(workspace_id, member_id, user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
