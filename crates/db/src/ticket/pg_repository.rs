use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, QueryBuilder, Row};
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::audit::{self, AuditAction, AuditEntity};
use crate::pagination::{clamp_limit, Cursor, Page};
use crate::ticket::models::{StatusChange, Ticket, TicketFilter, TicketStatus};
use crate::ticket::repositories::TicketRepository;

#[derive(Clone)]
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_ticket_row(row: &PgRow) -> TicketryResult<Ticket> {
        let status_raw: String = row.get("status");
        let status = TicketStatus::from_str(&status_raw).map_err(TicketryError::Database)?;

        Ok(Ticket {
            id: row.get("id"),
            content: row.get("content"),
            project_id: row.get("project_id"),
            created_by: row.get("created_by"),
            status,
            assigned_to: row.get("assigned_to"),
            created_at: row.get("created_at"),
            deleted_at: row.get("deleted_at"),
        })
    }

    fn map_history_row(row: &PgRow) -> TicketryResult<StatusChange> {
        let status_raw: String = row.get("status");
        let status = TicketStatus::from_str(&status_raw).map_err(TicketryError::Database)?;

        Ok(StatusChange {
            id: row.get("id"),
            ticket_id: row.get("ticket_id"),
            status,
            updated_by: row.get("updated_by"),
            updated_at: row.get("updated_at"),
        })
    }

    async fn append_history(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        ticket_id: Uuid,
        status: TicketStatus,
        updated_by: Uuid,
    ) -> TicketryResult<()> {
        sqlx::query(
            "insert into ticket_status_history (id, ticket_id, status, updated_by, updated_at)
             values ($1, $2, $3, $4, $5)",
        )
        .bind(Uuid::new_v4())
        .bind(ticket_id)
        .bind(status.as_str())
        .bind(updated_by)
        .bind(Utc::now())
        .execute(&mut **tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn create(
        &self,
        project_id: Uuid,
        creator: Uuid,
        content: &str,
        assigned_to: Option<Uuid>,
    ) -> TicketryResult<Ticket> {
        if content.trim().is_empty() {
            return Err(TicketryError::BadRequest(
                "ticket content is required".to_owned(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let ticket_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "insert into tickets (id, content, project_id, created_by, status, assigned_to, created_at)
             values ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(ticket_id)
        .bind(content)
        .bind(project_id)
        .bind(creator)
        .bind(TicketStatus::Open.as_str())
        .bind(assigned_to)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        Self::append_history(&mut tx, ticket_id, TicketStatus::Open, creator).await?;

        audit::record(
            &mut tx,
            creator,
            AuditAction::Create,
            AuditEntity::Ticket,
            ticket_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(Ticket {
            id: ticket_id,
            content: content.to_owned(),
            project_id,
            created_by: creator,
            status: TicketStatus::Open,
            assigned_to,
            created_at: now,
            deleted_at: None,
        })
    }

    async fn transition(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        actor: Uuid,
        new_status: TicketStatus,
    ) -> TicketryResult<Ticket> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        // The row lock serializes concurrent transitions of the same ticket;
        // a second caller blocks here until the first commits, then sees the
        // committed status.
        let row = sqlx::query(
            "select id, content, project_id, created_by, status, assigned_to, created_at, deleted_at
             from tickets
             where id = $1 and project_id = $2
             for update",
        )
        .bind(ticket_id)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        let row = match row {
            Some(r) => r,
            None => {
                return Err(TicketryError::NotFound(format!(
                    "ticket not found: {ticket_id}"
                )))
            }
        };

        let mut ticket = Self::map_ticket_row(&row)?;

        if ticket.deleted_at.is_some() {
            return Err(TicketryError::BadRequest(
                "cannot update a deleted ticket".to_owned(),
            ));
        }

        if !ticket.status.can_transition_to(new_status) {
            return Err(TicketryError::InvalidTransition {
                from: ticket.status.as_str().to_owned(),
                to: new_status.as_str().to_owned(),
            });
        }

        sqlx::query("update tickets set status = $1 where id = $2")
            .bind(new_status.as_str())
            .bind(ticket_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Self::append_history(&mut tx, ticket_id, new_status, actor).await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        tracing::info!(
            %ticket_id,
            from = ticket.status.as_str(),
            to = new_status.as_str(),
            "ticket status updated"
        );

        ticket.status = new_status;
        Ok(ticket)
    }

    async fn soft_delete(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        actor: Uuid,
    ) -> TicketryResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let row = sqlx::query(
            "select deleted_at from tickets where id = $1 and project_id = $2 for update",
        )
        .bind(ticket_id)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        let row = match row {
            Some(r) => r,
            None => {
                return Err(TicketryError::NotFound(format!(
                    "ticket not found: {ticket_id}"
                )))
            }
        };

        let deleted_at: Option<chrono::DateTime<Utc>> = row.get("deleted_at");
        if deleted_at.is_some() {
            return Err(TicketryError::AlreadyDeleted(format!(
                "ticket {ticket_id}"
            )));
        }

        sqlx::query("update tickets set deleted_at = $1 where id = $2")
            .bind(Utc::now())
            .bind(ticket_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        audit::record(
            &mut tx,
            actor,
            AuditAction::Delete,
            AuditEntity::Ticket,
            ticket_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list(&self, project_id: Uuid, filter: TicketFilter) -> TicketryResult<Page<Ticket>> {
        let limit = clamp_limit(filter.limit);

        let mut qb = QueryBuilder::new(
            "select id, content, project_id, created_by, status, assigned_to, created_at, deleted_at \
             from tickets where project_id = ",
        );
        qb.push_bind(project_id);
        qb.push(" and deleted_at is null");

        if let Some(status) = filter.status {
            qb.push(" and status = ").push_bind(status.as_str());
        }
        if let Some(assigned_to) = filter.assigned_to {
            qb.push(" and assigned_to = ").push_bind(assigned_to);
        }
        if let Some(raw) = filter.cursor.as_deref() {
            let cursor = Cursor::from_str(raw)?;
            qb.push(" and (created_at, id) < (")
                .push_bind(cursor.created_at)
                .push(", ")
                .push_bind(cursor.id)
                .push(")");
        }

        qb.push(" order by created_at desc, id desc");
        qb.push(" limit ").push_bind(limit);

        let rows = qb
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        let tickets = rows
            .iter()
            .map(Self::map_ticket_row)
            .collect::<TicketryResult<Vec<_>>>()?;

        Ok(Page::from_rows(tickets, limit, |t| {
            Cursor::new(t.created_at, t.id)
        }))
    }

    async fn history(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
    ) -> TicketryResult<Vec<StatusChange>> {
        let exists = sqlx::query("select id from tickets where id = $1 and project_id = $2")
            .bind(ticket_id)
            .bind(project_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        if exists.is_none() {
            return Err(TicketryError::NotFound(format!(
                "ticket not found: {ticket_id}"
            )));
        }

        let rows = sqlx::query(
            "select id, ticket_id, status, updated_by, updated_at
             from ticket_status_history
             where ticket_id = $1
             order by updated_at desc, id desc",
        )
        .bind(ticket_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        rows.iter().map(Self::map_history_row).collect()
    }
}
