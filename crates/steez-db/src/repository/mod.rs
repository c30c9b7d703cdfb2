//! # Repository Module
//!
//! Database repository implementations for Steez Sales.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  HTTP handler                                                          │
//! │       │                                                                 │
//! │       │  db.sales().create(&draft)                                     │
//! │       ▼                                                                 │
//! │  SaleRepository                                                        │
//! │  ├── create(&self, draft)                                              │
//! │  ├── update(&self, id, draft)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  └── list_all(&self)                                                   │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`SaleRepository`](sale::SaleRepository) - Sale record CRUD

pub mod sale;
