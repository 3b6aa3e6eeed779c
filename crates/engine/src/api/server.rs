use anyhow::Result;
use std::net::SocketAddr;
use tokio::sync::watch;

use super::routes::create_router;
use super::state::AppState;

pub async fn start_server(
    state: AppState,
    bind_addr: SocketAddr,
    shutdown_rx: watch::Receiver<bool>,
) -> Result<()> {
    let app = create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Spyglass webhook listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_rx))
        .await?;

    Ok(())
}

async fn shutdown_signal(mut shutdown_rx: watch::Receiver<bool>) {
    // Wait for shutdown signal
    while !*shutdown_rx.borrow() {
        if shutdown_rx.changed().await.is_err() {
            break;
        }
    }
    tracing::info!("Shutting down webhook server...");
}
