//! # Report Handlers

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use tracing::debug;

use steez_core::{yearly_summary, YearlySummary};

use crate::error::ApiResult;
use crate::export::{sales_csv, EXPORT_FILENAME};
use crate::state::AppState;

/// `GET /dashboard-yearly`: per-year sums, ascending by year.
///
/// Reads all rows then aggregates; writes landing in between are not seen.
pub async fn dashboard_yearly(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<YearlySummary>>> {
    let sales = state.db.sales().list_all().await?;
    let summary = yearly_summary(&sales);

    debug!(records = sales.len(), years = summary.len(), "Yearly summary computed");
    Ok(Json(summary))
}

/// `GET /export`: every stored column of every record as a CSV download.
pub async fn export_sales(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let sales = state.db.sales().list_all().await?;
    let body = sales_csv(&sales)?;

    debug!(records = sales.len(), bytes = body.len(), "Export generated");

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILENAME}\""),
            ),
        ],
        body,
    ))
}
