use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use ticketry_db::authz::models::{WorkspaceScope, ADMIN_ONLY, READ_ROLES};
use ticketry_db::authz::repositories::AuthzRepository;
use ticketry_db::project::repositories::ProjectRepository;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::projects::requests::CreateProjectRequest;
use crate::projects::responses::{ListProjectsResponse, ProjectResponse};
use crate::AppState;

pub async fn create_project(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(workspace_id): Path<Uuid>,
    Json(req): Json<CreateProjectRequest>,
) -> Result<(StatusCode, Json<ProjectResponse>), ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Workspace(workspace_id), ADMIN_ONLY)
        .await?;

    let project = state
        .project_repo
        .create(workspace_id, &req.name, user)
        .await?;

    Ok((StatusCode::CREATED, Json(project.into())))
}

pub async fn list_projects(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(workspace_id): Path<Uuid>,
) -> Result<Json<ListProjectsResponse>, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Workspace(workspace_id), READ_ROLES)
        .await?;

    let projects = state.project_repo.list(workspace_id).await?;
    let data: Vec<ProjectResponse> = projects.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ListProjectsResponse { data, count }))
}
