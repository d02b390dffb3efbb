use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pathfinder_api::config::Config;
use pathfinder_api::opportunities::store::OpportunityStore;
use pathfinder_api::routes::build_router;
use pathfinder_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first so the log filter can use it
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PathFinder API v{}", env!("CARGO_PKG_VERSION"));

    // Seed the in-memory opportunity catalog; read-only from here on
    let store = OpportunityStore::seed();
    info!("Opportunity catalog seeded ({} records)", store.list().len());

    // Build app state
    let state = AppState {
        store,
        config: config.clone(),
    };

    // Build router. Permissive CORS covers the split dev setup (SPA dev server
    // on its own port); in production the SPA is served same-origin.
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
