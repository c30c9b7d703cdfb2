//! # Domain Types
//!
//! Core domain types used throughout Steez Sales.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SaleInput     │   │   SaleDraft     │   │   SaleRecord    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  supplier       │──►│  input          │──►│  id (INTEGER)   │       │
//! │  │  party, date    │   │  derived        │   │  all input      │       │
//! │  │  invoice_total  │   │                 │   │  outstanding    │       │
//! │  │  amount_paid    │   │                 │   │  status, profit │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                             │
//! │  │ DerivedFields   │   │ PaymentStatus   │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  outstanding    │   │  Paid           │                             │
//! │  │  status         │   │  Partial        │                             │
//! │  │  profit         │   │  Unpaid         │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Open Strings
//! `supplier`, `party` and `work_type` are free strings. The option lists served
//! to the form are hints only, so nothing here rejects an unknown supplier.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::derivation::derive_fields;
use crate::money::round_currency;

// =============================================================================
// Payment Status
// =============================================================================

/// Derived payment state of a sale.
///
/// Serialized exactly as `"Paid"`, `"Partial"`, `"Unpaid"`, which is also the
/// text stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PaymentStatus {
    /// Nothing outstanding.
    Paid,
    /// Something paid, something (or a negative amount) outstanding.
    Partial,
    /// Nothing paid yet.
    Unpaid,
}

impl PaymentStatus {
    /// Returns the stored text form of the status.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Partial => "Partial",
            PaymentStatus::Unpaid => "Unpaid",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Sale Input
// =============================================================================

/// The caller-supplied fields of a sale.
///
/// This is the body of both `POST /record-sale` and `PUT /update-sale/:id`.
/// Every field is required; serde rejects a body with a missing or
/// wrong-typed field before any derivation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleInput {
    pub supplier: String,
    pub party: String,
    /// Calendar date, ISO-like. Not validated at write time.
    pub date: String,
    pub work_type: String,
    /// Expected 0-100, not enforced.
    pub completion_percent: f64,
    pub quotation_no: String,
    pub po_no: String,
    pub invoice_no: String,
    pub invoice_total: f64,
    pub amount_paid: f64,
}

// =============================================================================
// Derived Fields
// =============================================================================

/// Values computed from `invoice_total` and `amount_paid` on every write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedFields {
    pub outstanding: f64,
    pub status: PaymentStatus,
    pub profit: f64,
}

// =============================================================================
// Sale Draft
// =============================================================================

/// A sale ready to be written: input plus freshly derived fields.
///
/// The only constructor runs the derivation, so a draft can never carry a
/// status or outstanding amount that disagrees with its own totals.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleDraft {
    input: SaleInput,
    derived: DerivedFields,
}

impl SaleDraft {
    /// Derives outstanding/status/profit for `input`.
    pub fn new(input: SaleInput) -> Self {
        let derived = derive_fields(input.invoice_total, input.amount_paid);
        SaleDraft { input, derived }
    }

    /// The caller-supplied fields.
    #[inline]
    pub fn input(&self) -> &SaleInput {
        &self.input
    }

    /// The derived fields.
    #[inline]
    pub fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    /// The response payload for a create/update (rounded to cents).
    pub fn outcome(&self) -> SaleOutcome {
        SaleOutcome::from(&self.derived)
    }

    /// Combines the draft with a store-assigned id into a full record.
    pub fn into_record(self, id: i64) -> SaleRecord {
        let SaleDraft { input, derived } = self;
        SaleRecord {
            id,
            supplier: input.supplier,
            party: input.party,
            date: input.date,
            work_type: input.work_type,
            completion_percent: input.completion_percent,
            quotation_no: input.quotation_no,
            po_no: input.po_no,
            invoice_no: input.invoice_no,
            invoice_total: input.invoice_total,
            amount_paid: input.amount_paid,
            outstanding: derived.outstanding,
            status: derived.status.as_str().to_string(),
            profit: derived.profit,
        }
    }
}

// =============================================================================
// Sale Record
// =============================================================================

/// A stored sale row.
///
/// Field order is the column order of the `sales` table and of the export.
/// `status` is kept as an open string: rows are read back exactly as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct SaleRecord {
    #[ts(type = "number")]
    pub id: i64,
    pub supplier: String,
    pub party: String,
    pub date: String,
    pub work_type: String,
    pub completion_percent: f64,
    pub quotation_no: String,
    pub po_no: String,
    pub invoice_no: String,
    pub invoice_total: f64,
    pub amount_paid: f64,
    pub outstanding: f64,
    pub status: String,
    pub profit: f64,
}

// =============================================================================
// Sale Outcome
// =============================================================================

/// Response body of create/update.
///
/// Values are rounded to two decimals here only; the stored row keeps full
/// precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleOutcome {
    pub outstanding: f64,
    pub status: PaymentStatus,
    pub profit: f64,
}

impl From<&DerivedFields> for SaleOutcome {
    fn from(derived: &DerivedFields) -> Self {
        SaleOutcome {
            outstanding: round_currency(derived.outstanding),
            status: derived.status,
            profit: round_currency(derived.profit),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
