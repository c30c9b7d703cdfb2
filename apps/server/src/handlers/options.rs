//! # Option Handlers

use axum::extract::State;
use axum::Json;

use crate::state::{AppState, FormOptions};

/// `GET /options`: supplier, party and work type lists for the entry form.
pub async fn get_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(state.options.as_ref().clone())
}
