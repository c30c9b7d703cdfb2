//! Errors produced by the pure sale logic.
//!
//! [`ValidationError`] covers malformed input and is wrapped by
//! [`CoreError`]. The server turns both into its JSON `ApiError`, with
//! validation failures answered as 422.
//!
//! There is no not-found variant: updating or deleting an unknown id
//! succeeds without touching any row.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

#[derive(Debug, Error)]
pub enum CoreError {
    /// Export table could not be produced.
    #[error("Export failed: {0}")]
    Export(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Problems with the shape of a sale payload.
///
/// Value ranges are not checked: a `completion_percent` of 140 or a
/// negative `amount_paid` is stored as given.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Numeric field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Body that is not a sale object, or a path id that is not an integer.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
