//! # Database Pool Management
//!
//! Opens the SQLite file behind the sales store and hands out repositories.
//!
//! ## Connection Setup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  DbConfig                                                               │
//! │    path ──────────────► sqlite://{path}?mode=rwc                        │
//! │    journal ───────────► WAL, synchronous = NORMAL                       │
//! │    max/min connections, acquire + idle timeouts                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database::new ──► SqlitePool ──► embedded migrations (optional)        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.sales() ──► SaleRepository (shares the pool)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! WAL lets `GET /sales` and the dashboard read while a sale is being
//! written. Each statement commits on its own.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::migrations::{self, MigrationStatus};
use crate::repository::sale::SaleRepository;

const IN_MEMORY: &str = ":memory:";

// =============================================================================
// Configuration
// =============================================================================

/// Where the sales database lives and how the pool behaves.
///
/// ## Example
/// ```rust
/// use std::time::Duration;
/// use steez_db::DbConfig;
///
/// let config = DbConfig::new("./steez.db")
///     .max_connections(8)
///     .connect_timeout(Duration::from_secs(2));
/// assert_eq!(config.max_connections, 8);
/// assert!(config.run_migrations);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// SQLite file, or `:memory:`.
    pub database_path: PathBuf,
    /// Upper bound on pooled connections (default 5).
    pub max_connections: u32,
    /// Connections kept open while idle (default 1).
    pub min_connections: u32,
    /// How long a request waits for a free connection (default 30s).
    pub connect_timeout: Duration,
    /// Idle connections above the minimum close after this (default 10m).
    pub idle_timeout: Duration,
    /// Apply embedded migrations when connecting (default on).
    pub run_migrations: bool,
}

impl DbConfig {
    /// Config for a file-backed database, created on first connect.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Config for a private in-memory database.
    ///
    /// Each call yields a separate, empty database. The pool holds a single
    /// connection, which keeps the database alive until the pool closes.
    pub fn in_memory() -> Self {
        DbConfig {
            max_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            ..DbConfig::new(IN_MEMORY)
        }
    }

    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    fn connect_options(&self) -> DbResult<SqliteConnectOptions> {
        let url = format!("sqlite://{}?mode=rwc", self.database_path.display());

        let options = SqliteConnectOptions::from_str(&url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .create_if_missing(true);

        Ok(options)
    }

    fn pool_options(&self) -> SqlitePoolOptions {
        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(self.connect_timeout)
            .idle_timeout(Some(self.idle_timeout))
    }
}

// =============================================================================
// Database
// =============================================================================

/// Handle to the sales database.
///
/// Cloning shares the underlying pool. The server keeps one in its state and
/// builds a repository per request:
///
/// ```rust,ignore
/// async fn list_sales(State(state): State<AppState>) -> ApiResult<Json<Vec<SaleRecord>>> {
///     Ok(Json(state.db.sales().list_all().await?))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connects, then applies pending migrations when the config asks for it.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(path = %config.database_path.display(), "Opening sales database");

        let connect_options = config.connect_options()?;
        debug!(
            max_connections = config.max_connections,
            min_connections = config.min_connections,
            "Connecting pool"
        );

        let pool = config
            .pool_options()
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let db = Database { pool };
        if config.run_migrations {
            db.run_migrations().await?;
        }

        info!("Sales database ready");
        Ok(db)
    }

    /// Applies any embedded migration not yet recorded.
    pub async fn run_migrations(&self) -> DbResult<()> {
        migrations::run_migrations(&self.pool).await
    }

    /// Reports embedded vs applied migrations.
    pub async fn migration_status(&self) -> DbResult<MigrationStatus> {
        migrations::migration_status(&self.pool).await
    }

    /// Raw pool access, for queries outside the repositories.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Sale record store.
    pub fn sales(&self) -> SaleRepository {
        SaleRepository::new(self.pool.clone())
    }

    /// Closes every connection. Later queries fail with
    /// [`DbError::ConnectionFailed`].
    pub async fn close(&self) {
        info!("Closing sales database");
        self.pool.close().await;
    }

    /// `true` when a trivial query round-trips.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_database() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_in_memory_databases_are_isolated() {
        let first = Database::new(DbConfig::in_memory()).await.unwrap();
        let second = Database::new(DbConfig::in_memory()).await.unwrap();

        sqlx::query("CREATE TABLE scratch (x INTEGER)")
            .execute(first.pool())
            .await
            .unwrap();

        let missing = sqlx::query("SELECT x FROM scratch")
            .fetch_all(second.pool())
            .await;
        assert!(missing.is_err());
    }

    #[tokio::test]
    async fn test_migration_status_after_connect() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status, MigrationStatus { total: 1, applied: 1 });
        assert!(status.is_current());
    }

    #[tokio::test]
    async fn test_migration_status_without_migrations() {
        let db = Database::new(DbConfig::in_memory().run_migrations(false))
            .await
            .unwrap();

        let status = db.migration_status().await.unwrap();
        assert_eq!(status.applied, 0);
        assert!(!status.is_current());
    }

    #[tokio::test]
    async fn test_health_check_after_close() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(!db.health_check().await);
    }

    #[test]
    fn test_in_memory_overrides() {
        let config = DbConfig::in_memory();

        assert_eq!(config.database_path, PathBuf::from(IN_MEMORY));
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.min_connections, 1);
        assert!(config.run_migrations);
    }

    #[test]
    fn test_config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
    }
}
