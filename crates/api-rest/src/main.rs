//! Chirp API server binary.

use anyhow::Context;
use chirp_api_rest::create_app;
use chirp_common::{init_tracing, AppConfig};
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.telemetry)?;

    let address = config.server_address();
    info!(
        address = %address,
        users_file = %config.storage.users_file.display(),
        swagger = config.server.enable_swagger,
        "Starting Chirp API"
    );

    let app = create_app(config).await?;

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Received shutdown signal");
}
