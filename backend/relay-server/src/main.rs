use relay_server::{AppState, ServerError, build_router, logger};

use std::error::Error;
use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Pick up a local .env before reading the environment
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = relay_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    let log_file_path = config.logging.file.as_ref().map(PathBuf::from);
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting relay-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Build application state and router
    let app = build_router(AppState::from_config(&config));

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Spawn signal handler for graceful shutdown
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                let _ = shutdown_tx.send(());
            }
            Err(e) => {
                // Keep the sender alive so the server is not shut down by the drop
                error!("Failed to listen for SIGINT: {}", e);
                std::future::pending::<()>().await;
                drop(shutdown_tx);
            }
        }
    });

    // Start server with graceful shutdown
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
            info!("Graceful shutdown complete");
        })
        .await
        .map_err(|source| ServerError::Serve {
            addr: actual_addr,
            source,
        })?;

    Ok(())
}
