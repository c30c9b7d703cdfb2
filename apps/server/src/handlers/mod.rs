//! # Handlers Module
//!
//! axum handlers, one file per area.
//!
//! ```text
//! handlers/
//! ├── options.rs  ◄─── GET /options
//! ├── sale.rs     ◄─── POST /record-sale, PUT /update-sale/{id},
//! │                    GET /sales, DELETE /delete-sale/{id}
//! ├── report.rs   ◄─── GET /dashboard-yearly, GET /export
//! └── health.rs   ◄─── GET /health
//! ```
//!
//! Handlers stay thin: extract, call steez-core / steez-db, wrap in JSON.
//! Every fallible handler returns [`ApiResult`](crate::error::ApiResult).

pub mod health;
pub mod options;
pub mod report;
pub mod sale;
