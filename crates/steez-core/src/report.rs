//! # Report Module
//!
//! Read-side computations over the full set of stored sales.
//!
//! ## Yearly Dashboard
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SaleRecord[] ──► parse date ──┬── ok ──► bucket by year ──► sum        │
//! │                                │                                        │
//! │                                └── bad ──► skipped (row stays stored)   │
//! │                                                                         │
//! │  Output: one YearlySummary per year, ascending                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Export Table
//! A flat table of every stored column, one row per record, values at stored
//! precision. Writing it to a file format is the caller's job.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use crate::types::SaleRecord;

// =============================================================================
// Date Parsing
// =============================================================================

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses a stored sale date.
///
/// Accepts plain dates, naive timestamps and RFC 3339 timestamps. Returns
/// `None` for anything else; a bad date is never an error.
///
/// ## Example
/// ```rust
/// use steez_core::report::parse_sale_date;
///
/// assert!(parse_sale_date("2024-02-29").is_some());
/// assert!(parse_sale_date("2023-02-29").is_none());
/// assert!(parse_sale_date("soon").is_none());
/// ```
pub fn parse_sale_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }

    if let Some(datetime) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(datetime.date());
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.date_naive())
}

// =============================================================================
// Yearly Summary
// =============================================================================

/// Money sums for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct YearlySummary {
    pub year: i32,
    pub invoice_total: f64,
    pub amount_paid: f64,
    pub outstanding: f64,
    pub profit: f64,
}

impl YearlySummary {
    fn add(&mut self, record: &SaleRecord) {
        self.invoice_total += record.invoice_total;
        self.amount_paid += record.amount_paid;
        self.outstanding += record.outstanding;
        self.profit += record.profit;
    }
}

/// Buckets records by the year of their date and sums the money columns.
///
/// Records with an unparseable date are left out. Buckets come back in
/// ascending year order.
pub fn yearly_summary(records: &[SaleRecord]) -> Vec<YearlySummary> {
    let mut buckets: BTreeMap<i32, YearlySummary> = BTreeMap::new();

    for record in records {
        let Some(date) = parse_sale_date(&record.date) else {
            debug!(id = record.id, date = %record.date, "Skipping sale with unparseable date");
            continue;
        };

        let year = date.year();
        buckets
            .entry(year)
            .or_insert_with(|| YearlySummary {
                year,
                ..YearlySummary::default()
            })
            .add(record);
    }

    buckets.into_values().collect()
}

// =============================================================================
// Export Table
// =============================================================================

/// Column headers of the export, in stored column order.
pub const EXPORT_COLUMNS: [&str; 14] = [
    "id",
    "supplier",
    "party",
    "date",
    "work_type",
    "completion_percent",
    "quotation_no",
    "po_no",
    "invoice_no",
    "invoice_total",
    "amount_paid",
    "outstanding",
    "status",
    "profit",
];

/// Flattens a record into export cells, matching [`EXPORT_COLUMNS`].
///
/// Numbers use Rust's shortest round-trip formatting, so no precision is lost.
pub fn export_row(record: &SaleRecord) -> [String; 14] {
    [
        record.id.to_string(),
        record.supplier.clone(),
        record.party.clone(),
        record.date.clone(),
        record.work_type.clone(),
        record.completion_percent.to_string(),
        record.quotation_no.clone(),
        record.po_no.clone(),
        record.invoice_no.clone(),
        record.invoice_total.to_string(),
        record.amount_paid.to_string(),
        record.outstanding.to_string(),
        record.status.clone(),
        record.profit.to_string(),
    ]
}

// =============================================================================
// Unit Tests
// =============================================================================
