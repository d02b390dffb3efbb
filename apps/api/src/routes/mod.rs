pub mod health;

use std::path::Path;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::{ServeDir, ServeFile};

use crate::analysis::handlers::handle_analyze_resume;
use crate::opportunities::handlers::handle_list_opportunities;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // Everything outside the API surface falls through to the SPA build
    // output, with index.html covering client-side routes. A missing asset
    // directory degrades to 404s without touching the API routes.
    let spa = ServeDir::new(&state.config.static_dir).not_found_service(ServeFile::new(
        Path::new(&state.config.static_dir).join("index.html"),
    ));

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/opportunities", get(handle_list_opportunities))
        .route("/resume/analyze", post(handle_analyze_resume))
        .fallback_service(spa)
        .with_state(state)
}
