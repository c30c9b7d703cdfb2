//! Schema migrations for the sales store.
//!
//! The SQL files under `migrations/sqlite/` are compiled into the binary and
//! applied in file-name order on startup. sqlx records each applied file in
//! `_sqlx_migrations`, so a second run is a no-op.
//!
//! New schema changes go in a new `NNN_description.sql` file. Applied files
//! are never edited, since sqlx checksums them.

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::error::DbResult;

static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations/sqlite");

/// Applies whatever embedded migrations the database has not seen yet.
pub async fn run_migrations(pool: &SqlitePool) -> DbResult<()> {
    info!(embedded = MIGRATOR.migrations.len(), "Applying sales schema migrations");

    MIGRATOR.run(pool).await?;

    info!("Sales schema up to date");
    Ok(())
}

/// Snapshot of embedded vs applied migrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationStatus {
    /// Migrations embedded in this binary.
    pub total: usize,
    /// Migrations recorded in `_sqlx_migrations`.
    pub applied: usize,
}

impl MigrationStatus {
    /// True when every embedded migration has been applied.
    pub fn is_current(&self) -> bool {
        self.applied >= self.total
    }
}

/// Counts embedded and applied migrations for `/health`.
///
/// A database that has never been migrated reports zero applied.
pub async fn migration_status(pool: &SqlitePool) -> DbResult<MigrationStatus> {
    let total = MIGRATOR.migrations.len();

    let applied: i64 = match sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
        .fetch_one(pool)
        .await
    {
        Ok(count) => count,
        Err(e) => {
            warn!(error = %e, "Could not read _sqlx_migrations");
            0
        }
    };

    Ok(MigrationStatus {
        total,
        applied: usize::try_from(applied).unwrap_or(0),
    })
}
