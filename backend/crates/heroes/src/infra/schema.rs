//! Schema bootstrap
//!
//! Migrations are embedded at compile time from `database/migrations` and
//! applied once at startup, before the server accepts traffic.

use sqlx::SqlitePool;
use sqlx::migrate::{MigrateError, Migrator};

pub static MIGRATOR: Migrator = sqlx::migrate!("../../../database/migrations");

/// Apply pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    tracing::info!(migrations = MIGRATOR.iter().count(), "Schema is up to date");
    Ok(())
}
