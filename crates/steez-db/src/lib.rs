//! # steez-db
//!
//! SQLite persistence for sale records.
//!
//! [`Database`] owns the pool and applies the embedded schema on connect.
//! [`SaleRepository`] is the only code that writes SQL against `sales`.
//! Every call takes the pool directly and each statement commits on its own.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use steez_core::SaleDraft;
//! use steez_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./steez.db")).await?;
//!
//! let record = db.sales().create(&SaleDraft::new(input)).await?;
//! let all = db.sales().list_all().await?;
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use migrations::MigrationStatus;
pub use pool::{Database, DbConfig};
pub use repository::sale::SaleRepository;
