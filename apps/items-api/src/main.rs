use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    // Initialize tracing with ErrorLayer for span trace capture
    init_tracing(&config.environment);

    let db = database::postgres::connect_from_config_with_retry(config.database.clone(), None)
        .await
        .map_err(|e| eyre::eyre!("PostgreSQL connection failed: {}", e))?;

    if config.run_migrations {
        database::postgres::run_migrations::<migration::Migrator>(&db, config.app.name).await?;
    } else {
        info!("RUN_MIGRATIONS=false, skipping migrations");
    }

    let state = AppState::new(config, db);

    // Items API behind the bearer-token gate, plus the unauthenticated
    // /health (liveness) and /ready (database ping) checks
    let app = api::app(&state);

    let server = state.config.server.clone();
    info!(
        "Starting items API ({:?} shutdown timeout)",
        server.shutdown_timeout()
    );

    // State moves here for cleanup
    create_production_app(app, &server, server.shutdown_timeout(), async move {
        info!("Shutting down: closing database connections");
        database::postgres::close(state.db).await;
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
