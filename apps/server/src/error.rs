//! JSON error responses.
//!
//! Handlers return [`ApiResult`]. Every failure becomes an [`ApiError`] body
//! with a status taken from its [`ErrorCode`]:
//!
//! | Source                                  | Code               | Status |
//! |-----------------------------------------|--------------------|--------|
//! | bad JSON body, non-integer path id      | `VALIDATION_ERROR` | 422    |
//! | non-finite number in a sale             | `VALIDATION_ERROR` | 422    |
//! | any [`DbError`]                         | `DATABASE_ERROR`   | 500    |
//! | CSV export failure                      | `INTERNAL`         | 500    |
//!
//! Storage details are logged, never sent to the client.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use steez_core::{CoreError, ValidationError};
use steez_db::DbError;

/// Body of every failed request:
///
/// ```json
/// { "code": "VALIDATION_ERROR", "message": "body has invalid format: missing field `amount_paid`" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    DatabaseError,
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        tracing::error!(error = %err, "Sales store request failed");

        let message = match err {
            DbError::ConnectionFailed(_) => "Database unavailable",
            DbError::MigrationFailed(_) => "Database schema out of date",
            DbError::PoolExhausted => "Database busy, retry shortly",
            DbError::QueryFailed(_) | DbError::Internal(_) => "Database operation failed",
        };
        ApiError::new(ErrorCode::DatabaseError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
            CoreError::Export(e) => {
                tracing::error!(error = %e, "CSV export failed");
                ApiError::internal("Export failed")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::from(ValidationError::InvalidFormat {
            field: "body".to_string(),
            reason: rejection.body_text(),
        })
        .into()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        CoreError::from(ValidationError::InvalidFormat {
            field: "id".to_string(),
            reason: rejection.body_text(),
        })
        .into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::ValidationError.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ErrorCode::DatabaseError.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ErrorCode::Internal.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_db_error_message_is_generic() {
        let err = ApiError::from(DbError::QueryFailed("no such table: sales".to_string()));

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, "Database operation failed");
    }

    #[test]
    fn test_validation_error_keeps_detail() {
        let err = ApiError::from(CoreError::from(ValidationError::NotFinite {
            field: "amount_paid".to_string(),
        }));

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Validation error: amount_paid must be a finite number");
    }

    #[test]
    fn test_pool_exhaustion_is_database_error() {
        let err = ApiError::from(DbError::PoolExhausted);

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("bad")).unwrap();
        assert_eq!(json, serde_json::json!({"code": "VALIDATION_ERROR", "message": "bad"}));
    }
}
