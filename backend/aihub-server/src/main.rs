use aihub_config::LogSink;
use aihub_server::{AppState, UserStore, build_router};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = aihub_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    config.init_logger(LogSink::Stdout)?;

    info!("Starting aihub-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let users_path = config.users_path()?;
    info!("User registry: {}", users_path.display());

    let app = build_router(AppState::new(UserStore::new(users_path)));

    // Create TCP listener
    let listener = TcpListener::bind(config.bind_addr()).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    // Without a signal handler, run until killed
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await
                }
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
