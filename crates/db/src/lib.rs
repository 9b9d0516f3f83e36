pub mod audit;
pub mod authz;
pub mod comment;
pub mod pagination;
pub mod project;
pub mod ticket;
pub mod workspace;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use ticketry_common::error::{TicketryError, TicketryResult};

/// Create a Postgres connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> TicketryResult<PgPool> {
    tracing::info!("connecting to database");
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))
}

/// Apply the embedded schema migrations.
pub async fn run_migrations(pool: &PgPool) -> TicketryResult<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| TicketryError::Database(e.to_string()))
}
