//! Errors raised by the sales store.
//!
//! Every sqlx failure is folded into one of the [`DbError`] buckets below,
//! and the server maps each bucket to a `DATABASE_ERROR` response after
//! logging the detail:
//!
//! ```text
//! sqlx::Error / MigrateError ──► DbError ──► ApiError (500, detail logged)
//! ```
//!
//! A missing sale id is not an error at this layer. Repository methods
//! return `Option` or `bool` for it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    /// The SQLite file could not be opened, or the pool is already closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// SQLite rejected a statement (constraint, missing table, locked file).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// No connection became free within the acquire timeout.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Anything sqlx reports outside the cases above.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_errors_are_categorized() {
        assert!(matches!(
            DbError::from(sqlx::Error::PoolTimedOut),
            DbError::PoolExhausted
        ));
        assert!(matches!(
            DbError::from(sqlx::Error::PoolClosed),
            DbError::ConnectionFailed(_)
        ));
    }

    #[test]
    fn test_row_not_found_is_internal() {
        // Repositories use fetch_optional, so a stray RowNotFound is a bug
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, DbError::Internal(_)));
    }
}
