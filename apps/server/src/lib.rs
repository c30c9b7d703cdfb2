//! # Steez Sales Server Library
//!
//! Router construction and shared pieces of the HTTP API. The binary in
//! `main.rs` only loads configuration, connects the database and serves
//! [`router`].
//!
//! ## Module Organization
//! ```text
//! steez_server/
//! ├── lib.rs          ◄─── You are here (router)
//! ├── main.rs         ◄─── Startup, tracing, graceful shutdown
//! ├── config.rs       ◄─── ServerConfig from STEEZ_* variables
//! ├── error.rs        ◄─── ApiError → JSON error responses
//! ├── export.rs       ◄─── CSV writer for GET /export
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState (Database + FormOptions)
//! │   └── options.rs  ◄─── FormOptions
//! └── handlers/
//!     ├── options.rs  ◄─── GET /options
//!     ├── sale.rs     ◄─── record / update / list / delete
//!     ├── report.rs   ◄─── dashboard and export
//!     └── health.rs   ◄─── GET /health
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod handlers;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult, ErrorCode};
pub use state::{AppState, FormOptions};

/// Builds the application router.
///
/// ## Routes
/// ```text
/// GET    /options             FormOptions
/// POST   /record-sale         SaleInput  → SaleOutcome
/// PUT    /update-sale/{id}    SaleInput  → SaleOutcome
/// GET    /sales               SaleRecord[] (id descending)
/// DELETE /delete-sale/{id}    {"status": "deleted"}
/// GET    /dashboard-yearly    YearlySummary[] (year ascending)
/// GET    /export              text/csv attachment
/// GET    /export-excel        same as /export
/// GET    /health              HealthResponse
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/options", get(handlers::options::get_options))
        .route("/record-sale", post(handlers::sale::record_sale))
        .route("/update-sale/{id}", put(handlers::sale::update_sale))
        .route("/sales", get(handlers::sale::list_sales))
        .route("/delete-sale/{id}", delete(handlers::sale::delete_sale))
        .route("/dashboard-yearly", get(handlers::report::dashboard_yearly))
        .route("/export", get(handlers::report::export_sales))
        // Path older front ends link to; same CSV body.
        .route("/export-excel", get(handlers::report::export_sales))
        .route("/health", get(handlers::health::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
