use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use ticketry_db::authz::models::{WorkspaceScope, READ_ROLES, WRITE_ROLES};
use ticketry_db::authz::repositories::AuthzRepository;
use ticketry_db::ticket::models::TicketFilter;
use ticketry_db::ticket::repositories::TicketRepository;
use uuid::Uuid;

use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::tickets::requests::{CreateTicketRequest, UpdateStatusRequest};
use crate::tickets::responses::{
    ListTicketsResponse, StatusChangeResponse, TicketHistoryResponse, TicketResponse,
};
use crate::AppState;

pub async fn create_ticket(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(project_id): Path<Uuid>,
    Json(req): Json<CreateTicketRequest>,
) -> Result<(StatusCode, Json<TicketResponse>), ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), WRITE_ROLES)
        .await?;

    let ticket = state
        .ticket_repo
        .create(project_id, user, &req.content, req.assigned_to)
        .await?;

    Ok((StatusCode::CREATED, Json(ticket.into())))
}

pub async fn update_ticket_status(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<TicketResponse>, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), WRITE_ROLES)
        .await?;

    let ticket = state
        .ticket_repo
        .transition(project_id, ticket_id, user, req.status)
        .await?;

    Ok(Json(ticket.into()))
}

pub async fn delete_ticket(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), WRITE_ROLES)
        .await?;

    state
        .ticket_repo
        .soft_delete(project_id, ticket_id, user)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_tickets(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(project_id): Path<Uuid>,
    Query(filter): Query<TicketFilter>,
) -> Result<Json<ListTicketsResponse>, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), READ_ROLES)
        .await?;

    let page = state.ticket_repo.list(project_id, filter).await?;
    let data: Vec<TicketResponse> = page.items.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(ListTicketsResponse {
        data,
        count,
        next_cursor: page.next_cursor,
    }))
}

pub async fn ticket_history(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path((project_id, ticket_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<TicketHistoryResponse>, ApiError> {
    state
        .authz
        .require_role(user, WorkspaceScope::Project(project_id), READ_ROLES)
        .await?;

    let changes = state.ticket_repo.history(project_id, ticket_id).await?;
    let data: Vec<StatusChangeResponse> = changes.into_iter().map(Into::into).collect();
    let count = data.len();

    Ok(Json(TicketHistoryResponse { data, count }))
}
