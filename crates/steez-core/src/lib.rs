//! # steez-core
//!
//! Sale types plus the rules that turn a stored sale into what the API
//! reports: outstanding balance, payment status, profit, yearly totals and
//! the export table. Nothing in here touches the database or the network,
//! so every rule is tested with plain values.
//!
//! ```text
//!   apps/server ──► steez-core::derive_fields / yearly_summary / export_row
//!        │
//!        └────────► steez-db (SaleRepository) ──► steez-core::SaleRecord
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (SaleInput, SaleRecord, PaymentStatus, ...)
//! - [`derivation`] - Per-record derivation of outstanding, status and profit
//! - [`report`] - Yearly aggregation and export table layout
//! - [`money`] - Rounding for response payloads
//! - [`options`] - Default supplier/party/work type lists
//! - [`error`] - Domain error types
//! - [`validation`] - Shape checks on incoming sale fields
//!
//! ## Example Usage
//!
//! ```rust
//! use steez_core::{derive_fields, PaymentStatus};
//!
//! let derived = derive_fields(1000.0, 400.0);
//! assert_eq!(derived.outstanding, 600.0);
//! assert_eq!(derived.status, PaymentStatus::Partial);
//! assert_eq!(derived.profit, 400.0);
//! ```

pub mod derivation;
pub mod error;
pub mod money;
pub mod options;
pub mod report;
pub mod types;
pub mod validation;

pub use derivation::derive_fields;
pub use error::{CoreError, ValidationError};
pub use options::{DEFAULT_PARTIES, DEFAULT_SUPPLIERS, DEFAULT_WORK_TYPES};
pub use report::{export_row, yearly_summary, YearlySummary, EXPORT_COLUMNS};
pub use types::*;
