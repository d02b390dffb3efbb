//! Axum route handlers for the opportunity catalog.

use axum::{extract::State, Json};

use crate::models::opportunity::Opportunity;
use crate::state::AppState;

/// GET /opportunities
///
/// Returns the full static catalog in seed order. No filtering — the category
/// browser narrows client-side.
pub async fn handle_list_opportunities(State(state): State<AppState>) -> Json<Vec<Opportunity>> {
    Json(state.store.list().to_vec())
}
