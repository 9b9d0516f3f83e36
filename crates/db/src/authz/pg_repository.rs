use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::authz::models::{Role, WorkspaceScope};
use crate::authz::repositories::AuthzRepository;

#[derive(Clone)]
pub struct PgAuthzRepository {
    pool: PgPool,
}

impl PgAuthzRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn workspace_of(&self, scope: WorkspaceScope) -> TicketryResult<Uuid> {
        match scope {
            WorkspaceScope::Workspace(workspace_id) => Ok(workspace_id),
            WorkspaceScope::Project(project_id) => {
                let row = sqlx::query("select workspace_id from projects where id = $1")
                    .bind(project_id)
                    .fetch_optional(&self.pool)
                    .await
                    .map_err(|e| TicketryError::Database(e.to_string()))?;

                match row {
                    Some(r) => Ok(r.get("workspace_id")),
                    None => Err(TicketryError::NotFound(format!(
                        "project not found: {project_id}"
                    ))),
                }
            }
        }
    }
}

#[async_trait]
impl AuthzRepository for PgAuthzRepository {
    async fn resolve_role(&self, user_id: Uuid, scope: WorkspaceScope) -> TicketryResult<Role> {
        let workspace_id = self.workspace_of(scope).await?;

        let row = sqlx::query(
            "select role from workspace_members
             where user_id = $1 and workspace_id = $2 and deleted_at is null",
        )
        .bind(user_id)
        .bind(workspace_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        let row = row.ok_or_else(|| {
            TicketryError::Denied("access to workspace denied".to_owned())
        })?;

        let raw: String = row.get("role");
        Role::from_str(&raw).map_err(TicketryError::Database)
    }
}
