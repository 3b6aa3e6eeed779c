use anyhow::Result;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use spyglass_engine::api::{self, AppState};
use spyglass_engine::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // .env may carry RUST_LOG, so load it before the subscriber
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    tracing::info!("Starting Spyglass...");

    let config = Config::from_env()?;
    if config.maps_api_key.is_none() {
        tracing::warn!("GOOGLE_MAPS_API_KEY is not set");
    }
    let state = AppState::from_config(&config)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let bind_addr = config.bind_addr;
    let mut api_handle =
        tokio::spawn(async move { api::start_server(state, bind_addr, shutdown_rx).await });

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result?;
            tracing::info!("Received shutdown signal...");
            let _ = shutdown_tx.send(true);
        }
        result = &mut api_handle => {
            // Server stopped on its own: a bind failure or a crash
            result?.inspect_err(|e| tracing::error!("Webhook server crashed: {}", e))?;
            return Ok(());
        }
    }

    api_handle.await??;

    tracing::info!("Spyglass shutdown complete.");
    Ok(())
}
