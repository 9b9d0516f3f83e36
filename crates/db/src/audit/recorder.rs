use chrono::Utc;
use sqlx::{Postgres, Transaction};
use ticketry_common::error::{TicketryError, TicketryResult};
use uuid::Uuid;

use crate::audit::models::{AuditAction, AuditEntity};

/// Append an audit row inside the caller's open transaction.
///
/// Never opens a transaction of its own: the audit entry and the mutation it
/// describes must commit or roll back together.
pub async fn record(
    tx: &mut Transaction<'_, Postgres>,
    performed_by: Uuid,
    action: AuditAction,
    entity: AuditEntity,
    entity_id: Uuid,
    metadata: Option<serde_json::Value>,
) -> TicketryResult<()> {
    sqlx::query(
        "insert into audit_logs (id, performed_by, action, entity_type, entity_id, metadata, created_at)
         values ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(Uuid::new_v4())
    .bind(performed_by)
    .bind(action.as_str())
    .bind(entity.as_str())
    .bind(entity_id)
    .bind(metadata)
    .bind(Utc::now())
    .execute(&mut **tx)
    .await
    .map_err(|e| TicketryError::Database(e.to_string()))?;

    Ok(())
}
