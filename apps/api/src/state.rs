use crate::config::Config;
use crate::opportunities::store::OpportunityStore;

/// Shared application state injected into all route handlers via Axum
/// extractors. Everything here is read-only after startup, so cloning per
/// request needs no coordination.
#[derive(Clone)]
pub struct AppState {
    pub store: OpportunityStore,
    pub config: Config,
}
