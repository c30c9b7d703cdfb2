//! # Sale Repository
//!
//! Database operations for sale records.
//!
//! ## Sale Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sale Lifecycle                                    │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── create(draft) → SaleRecord { id: next AUTOINCREMENT }          │
//! │                                                                         │
//! │  2. UPDATE (any number of times)                                       │
//! │     └── update(id, draft) → every column overwritten, id kept          │
//! │     └── unknown id → None, nothing written                             │
//! │                                                                         │
//! │  3. DELETE                                                             │
//! │     └── delete(id) → row gone (no soft delete)                         │
//! │     └── unknown id → false                                             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Writes take a [`SaleDraft`], so outstanding/status/profit are always the
//! ones derived from the draft's own totals.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use steez_core::{SaleDraft, SaleRecord};

const SELECT_COLUMNS: &str = r#"
    SELECT
        id, supplier, party, date, work_type, completion_percent,
        quotation_no, po_no, invoice_no,
        invoice_total, amount_paid, outstanding, status, profit
    FROM sales
"#;

/// Repository for sale database operations.
#[derive(Debug, Clone)]
pub struct SaleRepository {
    pool: SqlitePool,
}

impl SaleRepository {
    /// Creates a new SaleRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SaleRepository { pool }
    }

    /// Inserts a new sale and returns it with its assigned id.
    pub async fn create(&self, draft: &SaleDraft) -> DbResult<SaleRecord> {
        let input = draft.input();
        let derived = draft.derived();

        debug!(
            supplier = %input.supplier,
            party = %input.party,
            invoice_no = %input.invoice_no,
            status = %derived.status,
            "Creating sale"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO sales (
                supplier, party, date, work_type, completion_percent,
                quotation_no, po_no, invoice_no,
                invoice_total, amount_paid, outstanding, status, profit
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5,
                ?6, ?7, ?8,
                ?9, ?10, ?11, ?12, ?13
            )
            "#,
        )
        .bind(input.supplier.as_str())
        .bind(input.party.as_str())
        .bind(input.date.as_str())
        .bind(input.work_type.as_str())
        .bind(input.completion_percent)
        .bind(input.quotation_no.as_str())
        .bind(input.po_no.as_str())
        .bind(input.invoice_no.as_str())
        .bind(input.invoice_total)
        .bind(input.amount_paid)
        .bind(derived.outstanding)
        .bind(derived.status.as_str())
        .bind(derived.profit)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Sale created");

        Ok(draft.clone().into_record(id))
    }

    /// Overwrites every column of the sale with `id`.
    ///
    /// Returns `None` when no sale has that id; nothing is written and
    /// nothing is created in that case.
    pub async fn update(&self, id: i64, draft: &SaleDraft) -> DbResult<Option<SaleRecord>> {
        let input = draft.input();
        let derived = draft.derived();

        debug!(id, status = %derived.status, "Updating sale");

        let result = sqlx::query(
            r#"
            UPDATE sales SET
                supplier = ?1,
                party = ?2,
                date = ?3,
                work_type = ?4,
                completion_percent = ?5,
                quotation_no = ?6,
                po_no = ?7,
                invoice_no = ?8,
                invoice_total = ?9,
                amount_paid = ?10,
                outstanding = ?11,
                status = ?12,
                profit = ?13
            WHERE id = ?14
            "#,
        )
        .bind(input.supplier.as_str())
        .bind(input.party.as_str())
        .bind(input.date.as_str())
        .bind(input.work_type.as_str())
        .bind(input.completion_percent)
        .bind(input.quotation_no.as_str())
        .bind(input.po_no.as_str())
        .bind(input.invoice_no.as_str())
        .bind(input.invoice_total)
        .bind(input.amount_paid)
        .bind(derived.outstanding)
        .bind(derived.status.as_str())
        .bind(derived.profit)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            debug!(id, "No sale to update");
            return Ok(None);
        }

        Ok(Some(draft.clone().into_record(id)))
    }

    /// Deletes the sale with `id`. Returns whether a row was removed.
    pub async fn delete(&self, id: i64) -> DbResult<bool> {
        debug!(id, "Deleting sale");

        let result = sqlx::query("DELETE FROM sales WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Gets a sale by ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<SaleRecord>> {
        let sql = format!("{SELECT_COLUMNS} WHERE id = ?1");

        let sale = sqlx::query_as::<_, SaleRecord>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(sale)
    }

    /// Every stored sale, newest id first.
    pub async fn list_all(&self) -> DbResult<Vec<SaleRecord>> {
        let sql = format!("{SELECT_COLUMNS} ORDER BY id DESC");

        let sales = sqlx::query_as::<_, SaleRecord>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = sales.len(), "Listed sales");
        Ok(sales)
    }

    /// Counts stored sales.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM sales")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Tests
// =============================================================================
