use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, Row};
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::audit::{self, AuditAction, AuditEntity};
use crate::project::models::Project;
use crate::project::repositories::ProjectRepository;

#[derive(Clone)]
pub struct PgProjectRepository {
    pool: PgPool,
}

impl PgProjectRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_project_row(row: &PgRow) -> Project {
        Project {
            id: row.get("id"),
            name: row.get("name"),
            workspace_id: row.get("workspace_id"),
            created_at: row.get("created_at"),
        }
    }
}

#[async_trait]
impl ProjectRepository for PgProjectRepository {
    async fn create(
        &self,
        workspace_id: Uuid,
        name: &str,
        creator: Uuid,
    ) -> TicketryResult<Project> {
        if name.trim().is_empty() {
            return Err(TicketryError::BadRequest(
                "project name is required".to_owned(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let project_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "insert into projects (id, name, workspace_id, created_at)
             values ($1, $2, $3, $4)",
        )
        .bind(project_id)
        .bind(name)
        .bind(workspace_id)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        audit::record(
            &mut tx,
            creator,
            AuditAction::Create,
            AuditEntity::Project,
            project_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(Project {
            id: project_id,
            name: name.to_owned(),
            workspace_id,
            created_at: now,
        })
    }

    async fn list(&self, workspace_id: Uuid) -> TicketryResult<Vec<Project>> {
        let rows = sqlx::query(
            "select id, name, workspace_id, created_at from projects
             where workspace_id = $1
             order by created_at desc",
        )
        .bind(workspace_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(rows.iter().map(Self::map_project_row).collect())
    }
}
