// --- File: crates/services/solarops_backend/src/main.rs ---
use solarops_backend::{build_app, AppState};
use solarops_common::{init_from_config, log_error, log_result, Context};
use solarops_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Arc::new(load_config().context("Failed to load configuration")?);
    // Keeps the file writer flushing until shutdown
    let _log_guard = init_from_config(config.logging.as_ref());

    let state = log_result(
        AppState::new(config.clone()),
        "Application state ready",
        "Failed to build application state",
    )?;
    let app = build_app(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            log_error(e, "Unable to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
