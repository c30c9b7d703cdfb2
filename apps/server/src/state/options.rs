//! # Form Options State
//!
//! The supplier, party and work type lists served to the sale entry form.
//!
//! Built once at startup (defaults, optionally replaced from the environment)
//! and shared read-only through [`AppState`](super::AppState), so no lock is
//! needed.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use steez_core::{DEFAULT_PARTIES, DEFAULT_SUPPLIERS, DEFAULT_WORK_TYPES};

/// Choice lists for the sale entry form.
///
/// Presentation hints only: sales naming values outside these lists are
/// accepted and stored unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FormOptions {
    pub suppliers: Vec<String>,
    pub parties: Vec<String>,
    pub work_types: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        FormOptions {
            suppliers: to_owned_list(DEFAULT_SUPPLIERS),
            parties: to_owned_list(DEFAULT_PARTIES),
            work_types: to_owned_list(DEFAULT_WORK_TYPES),
        }
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
