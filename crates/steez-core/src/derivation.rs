//! # Derivation Module
//!
//! Computes the derived columns of a sale from its two monetary inputs.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  outstanding = invoice_total - amount_paid                              │
//! │                                                                         │
//! │  outstanding == 0            ──► Paid                                   │
//! │  outstanding != 0, paid > 0  ──► Partial   (overpayment included)       │
//! │  otherwise                   ──► Unpaid                                 │
//! │                                                                         │
//! │  profit = amount_paid                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The comparison with zero is exact. No cost field exists in the model, so
//! profit simply mirrors the amount received.

use crate::types::{DerivedFields, PaymentStatus};

/// Derives outstanding, status and profit.
///
/// ## Example
/// ```rust
/// use steez_core::{derive_fields, PaymentStatus};
///
/// let overpaid = derive_fields(100.0, 120.0);
/// assert_eq!(overpaid.outstanding, -20.0);
/// assert_eq!(overpaid.status, PaymentStatus::Partial);
/// ```
pub fn derive_fields(invoice_total: f64, amount_paid: f64) -> DerivedFields {
    let outstanding = invoice_total - amount_paid;

    DerivedFields {
        outstanding,
        status: payment_status(outstanding, amount_paid),
        profit: amount_paid,
    }
}

/// Status for an already computed outstanding amount.
pub fn payment_status(outstanding: f64, amount_paid: f64) -> PaymentStatus {
    if outstanding == 0.0 {
        PaymentStatus::Paid
    } else if amount_paid > 0.0 {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Unpaid
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
