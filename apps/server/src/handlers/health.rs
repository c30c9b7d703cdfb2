//! # Health Handler
//!
//! Liveness of the database and migration state, for load balancers and
//! deploy checks.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiResult;
use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    pub migrations: MigrationCounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigrationCounts {
    pub total: usize,
    pub applied: usize,
}

/// `GET /health`: 200 when the database answers and is fully migrated,
/// 503 otherwise.
pub async fn health(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<HealthResponse>)> {
    let connected = state.db.health_check().await;
    let migrations = state.db.migration_status().await?;

    let healthy = connected && migrations.is_current();
    if !healthy {
        warn!(
            connected,
            applied = migrations.applied,
            total = migrations.total,
            "Health check failed"
        );
    }

    let body = HealthResponse {
        status: (if healthy { "ok" } else { "degraded" }).to_string(),
        database: (if connected { "connected" } else { "unavailable" }).to_string(),
        migrations: MigrationCounts {
            total: migrations.total,
            applied: migrations.applied,
        },
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    Ok((status, Json(body)))
}
