//! PostgreSQL persistence for content, taxonomies and leads.
//!
//! One zero-sized `*Repo` per table family, each exposing async functions
//! that take a `&PgPool` and return `sqlx::Error` on failure.

pub mod models;
pub mod repositories;
pub mod sql;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await?;
    tracing::debug!(max_connections, "Database pool created");
    Ok(pool)
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    let migrator = sqlx::migrate!("../../db/migrations");
    migrator.run(pool).await?;
    tracing::info!(count = migrator.iter().count(), "Migrations applied");
    Ok(())
}
