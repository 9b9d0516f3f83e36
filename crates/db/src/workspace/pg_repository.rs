use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::audit::{self, AuditAction, AuditEntity};
use crate::authz::models::Role;
use crate::workspace::models::{Membership, Workspace};
use crate::workspace::repositories::WorkspaceRepository;

#[derive(Clone)]
pub struct PgWorkspaceRepository {
    pool: PgPool,
}

impl PgWorkspaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_insert_err(e: sqlx::Error, conflict_msg: &str) -> TicketryError {
    if let sqlx::Error::Database(ref db) = e {
        if matches!(db.kind(), sqlx::error::ErrorKind::UniqueViolation) {
            return TicketryError::Conflict(conflict_msg.to_owned());
        }
    }
    TicketryError::Database(e.to_string())
}

#[async_trait]
impl WorkspaceRepository for PgWorkspaceRepository {
    async fn create(&self, name: &str, creator: Uuid) -> TicketryResult<Workspace> {
        if name.trim().is_empty() {
            return Err(TicketryError::BadRequest(
                "workspace name is required".to_owned(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let workspace_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query("insert into workspaces (id, name, created_at) values ($1, $2, $3)")
            .bind(workspace_id)
            .bind(name)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        sqlx::query(
            "insert into workspace_members (user_id, workspace_id, role)
             values ($1, $2, $3)",
        )
        .bind(creator)
        .bind(workspace_id)
        .bind(Role::Admin.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        audit::record(
            &mut tx,
            creator,
            AuditAction::Create,
            AuditEntity::Workspace,
            workspace_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        tracing::info!(%workspace_id, "workspace created");

        Ok(Workspace {
            id: workspace_id,
            name: name.to_owned(),
            created_at: now,
        })
    }

    async fn add_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        role: Role,
        actor: Uuid,
    ) -> TicketryResult<Membership> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        sqlx::query(
            "insert into workspace_members (user_id, workspace_id, role)
             values ($1, $2, $3)",
        )
        .bind(user_id)
        .bind(workspace_id)
        .bind(role.as_str())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_err(e, "user is already a member of this workspace"))?;

        let metadata = serde_json::json!({
            "workspace_id": workspace_id,
            "role": role.as_str(),
        });
        audit::record(
            &mut tx,
            actor,
            AuditAction::AddUser,
            AuditEntity::Membership,
            user_id,
            Some(metadata),
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(Membership {
            user_id,
            workspace_id,
            role,
            deleted_at: None,
        })
    }

    async fn remove_member(
        &self,
        workspace_id: Uuid,
        user_id: Uuid,
        actor: Uuid,
    ) -> TicketryResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let result = sqlx::query(
            "update workspace_members set deleted_at = $1
             where user_id = $2 and workspace_id = $3 and deleted_at is null",
        )
        .bind(Utc::now())
        .bind(user_id)
        .bind(workspace_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(TicketryError::NotFound(format!(
                "active membership not found: {user_id}"
            )));
        }

        let metadata = serde_json::json!({ "workspace_id": workspace_id });
        audit::record(
            &mut tx,
            actor,
            AuditAction::Delete,
            AuditEntity::Membership,
            user_id,
            Some(metadata),
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(())
    }
}
