//! # Sale Handlers
//!
//! Create, update, list and delete of sale records.
//!
//! ```text
//! SaleInput JSON ──► validate ──► SaleDraft::new (derive) ──► SaleRepository
//!                                        │
//!                                        └──► SaleOutcome (rounded) ──► client
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use steez_core::validation::validate_sale_input;
use steez_core::{CoreError, SaleDraft, SaleInput, SaleOutcome, SaleRecord};

use crate::error::ApiResult;
use crate::state::AppState;

/// Body of `DELETE /delete-sale/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub status: String,
}

impl DeleteResponse {
    fn deleted() -> Self {
        DeleteResponse {
            status: "deleted".to_string(),
        }
    }
}

/// Checks the body and runs the derivation.
fn draft_from(body: Result<Json<SaleInput>, JsonRejection>) -> ApiResult<SaleDraft> {
    let Json(input) = body?;
    validate_sale_input(&input).map_err(CoreError::from)?;
    Ok(SaleDraft::new(input))
}

/// `POST /record-sale`
pub async fn record_sale(
    State(state): State<AppState>,
    body: Result<Json<SaleInput>, JsonRejection>,
) -> ApiResult<Json<SaleOutcome>> {
    let draft = draft_from(body)?;

    let record = state.db.sales().create(&draft).await?;
    info!(id = record.id, status = %record.status, "Sale recorded");

    Ok(Json(draft.outcome()))
}

/// `PUT /update-sale/{id}`
///
/// An id with no stored sale writes nothing and still answers with the
/// derived values of the body.
pub async fn update_sale(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<SaleInput>, JsonRejection>,
) -> ApiResult<Json<SaleOutcome>> {
    let Path(id) = id?;
    let draft = draft_from(body)?;

    match state.db.sales().update(id, &draft).await? {
        Some(record) => info!(id = record.id, status = %record.status, "Sale updated"),
        None => debug!(id, "Update of unknown sale ignored"),
    }

    Ok(Json(draft.outcome()))
}

/// `GET /sales`: every record, newest id first.
pub async fn list_sales(State(state): State<AppState>) -> ApiResult<Json<Vec<SaleRecord>>> {
    let sales = state.db.sales().list_all().await?;
    Ok(Json(sales))
}

/// `DELETE /delete-sale/{id}`: idempotent.
pub async fn delete_sale(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;

    if state.db.sales().delete(id).await? {
        info!(id, "Sale deleted");
    } else {
        debug!(id, "Delete of unknown sale ignored");
    }

    Ok(Json(DeleteResponse::deleted()))
}
