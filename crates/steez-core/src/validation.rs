//! # Validation Module
//!
//! Shape checks for incoming sale fields.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  ├── Every field present                                               │
//! │  └── Strings are strings, numbers are numbers                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  └── Numbers are finite (callers that do not go through JSON)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! │                                                                         │
//! │  Business ranges (completion 0-100, known suppliers) are NOT checked.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::derivation::derive_fields;
use crate::error::ValidationError;
use crate::types::SaleInput;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Checks that a numeric field holds a finite value.
///
/// ## Example
/// ```rust
/// use steez_core::validation::validate_finite;
///
/// assert!(validate_finite("invoice_total", 1200.5).is_ok());
/// assert!(validate_finite("invoice_total", f64::NAN).is_err());
/// ```
pub fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Checks every numeric field of a sale input, plus the outstanding balance
/// the derivation will store.
pub fn validate_sale_input(input: &SaleInput) -> ValidationResult<()> {
    validate_finite("completion_percent", input.completion_percent)?;
    validate_finite("invoice_total", input.invoice_total)?;
    validate_finite("amount_paid", input.amount_paid)?;
    validate_finite("outstanding", derive_fields(input.invoice_total, input.amount_paid).outstanding)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
