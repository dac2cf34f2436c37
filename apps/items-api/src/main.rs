use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use items_api::{AppState, Config, api::items::base_route_url, build_app};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    info!(
        base_url = %base_route_url(&config.server),
        "Item URLs will be served under base route"
    );

    let state = AppState::new(config);
    let app = build_app(&state).await?;

    info!("Starting Items API with graceful shutdown (30s timeout)");

    // The in-memory repository holds nothing to flush on shutdown
    create_production_app(app, &state.config.server, Duration::from_secs(30), async {})
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
