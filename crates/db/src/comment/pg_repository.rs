use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{postgres::PgRow, PgPool, QueryBuilder, Row};
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::audit::{self, AuditAction, AuditEntity};
use crate::comment::models::{Comment, CommentFilter};
use crate::comment::repositories::CommentRepository;
use crate::pagination::{clamp_limit, Cursor, Page};

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn map_comment_row(row: &PgRow) -> Comment {
        Comment {
            id: row.get("id"),
            ticket_id: row.get("ticket_id"),
            user_id: row.get("user_id"),
            content: row.get("content"),
            created_at: row.get("created_at"),
        }
    }

    /// The parent ticket must exist in the project and not be soft-deleted.
    async fn live_ticket_exists<'e, E>(
        executor: E,
        project_id: Uuid,
        ticket_id: Uuid,
    ) -> TicketryResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Postgres>,
    {
        let row = sqlx::query(
            "select id from tickets
             where id = $1 and project_id = $2 and deleted_at is null",
        )
        .bind(ticket_id)
        .bind(project_id)
        .fetch_optional(executor)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(row.is_some())
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn create(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        author: Uuid,
        content: &str,
    ) -> TicketryResult<Comment> {
        if content.trim().is_empty() {
            return Err(TicketryError::BadRequest(
                "comment content is required".to_owned(),
            ));
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        if !Self::live_ticket_exists(&mut *tx, project_id, ticket_id).await? {
            return Err(TicketryError::NotFound(
                "ticket not found or has been deleted".to_owned(),
            ));
        }

        let comment_id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            "insert into comments (id, ticket_id, user_id, content, created_at)
             values ($1, $2, $3, $4, $5)",
        )
        .bind(comment_id)
        .bind(ticket_id)
        .bind(author)
        .bind(content)
        .bind(now)
        .execute(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        audit::record(
            &mut tx,
            author,
            AuditAction::Create,
            AuditEntity::Comment,
            comment_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(Comment {
            id: comment_id,
            ticket_id,
            user_id: author,
            content: content.to_owned(),
            created_at: now,
        })
    }

    async fn delete(&self, ticket_id: Uuid, comment_id: Uuid, actor: Uuid) -> TicketryResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        // Matching on owner as well as id masks other users' comments:
        // "someone else's comment" and "no such comment" are the same answer.
        let row = sqlx::query(
            "select id from comments where id = $1 and ticket_id = $2 and user_id = $3",
        )
        .bind(comment_id)
        .bind(ticket_id)
        .bind(actor)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))?;

        if row.is_none() {
            return Err(TicketryError::NotFound(
                "comment not found or does not belong to the user".to_owned(),
            ));
        }

        sqlx::query("delete from comments where id = $1")
            .bind(comment_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        audit::record(
            &mut tx,
            actor,
            AuditAction::Delete,
            AuditEntity::Comment,
            comment_id,
            None,
        )
        .await?;

        tx.commit()
            .await
            .map_err(|e| TicketryError::Database(e.to_string()))?;

        Ok(())
    }

    async fn list(
        &self,
        project_id: Uuid,
        ticket_id: Uuid,
        filter: CommentFilter,
    ) -> TicketryResult<Page<Comment>> {
        if !Self::live_ticket_exists(&self.pool, project_id, ticket_id).await? {
            return Err(TicketryError::NotFound(
                "ticket not found or has been deleted".to_owned(),
            ));
        }

        let limit = clamp_limit(filter.limit);

        let mut qb = QueryBuilder::new(
            "select id, ticket_id, user_id, content, created_at from comments where ticket_id = ",
        );
        qb.push_bind(ticket_id);

        if let Some(created_by) = filter.created_by {
            qb.push(" and user_id = ").push_bind(created_by);
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

        let comments: Vec<Comment> = rows.iter().map(Self::map_comment_row).collect();

        Ok(Page::from_rows(comments, limit, |c| {
            Cursor::new(c.created_at, c.id)
        }))
    }
}
