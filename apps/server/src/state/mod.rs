//! # State Module
//!
//! Shared state handed to every axum handler.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  Router::with_state(AppState)                                          │
//! │                     │                                                   │
//! │          ┌──────────┴───────────┐                                       │
//! │          ▼                      ▼                                       │
//! │  ┌──────────────┐     ┌───────────────────┐                            │
//! │  │   Database   │     │ Arc<FormOptions>  │                            │
//! │  │  (SqlitePool │     │  suppliers        │                            │
//! │  │   inside)    │     │  parties          │                            │
//! │  │              │     │  work_types       │                            │
//! │  └──────────────┘     └───────────────────┘                            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Database: pool is internally synchronized                           │
//! │  • FormOptions: read-only after startup                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod options;

use std::sync::Arc;

use steez_db::Database;

pub use options::FormOptions;

/// State shared by all handlers. Cloned per request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub options: Arc<FormOptions>,
}

impl AppState {
    /// Wraps a connected database and the startup option lists.
    pub fn new(db: Database, options: FormOptions) -> Self {
        AppState {
            db,
            options: Arc::new(options),
        }
    }
}
