//! civic-server — CivicDesk complaint tracking backend
//!
//! Long-running service that:
//! - Stores citizen complaints (create, list, status updates)
//! - Relays chat prompts to a hosted language-model API

use civic_server::api;
use civic_server::core::{AppState, Config};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "civic_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting civic-server (env: {})", config.environment);

    // Initialize application state
    let state = AppState::new(&config).await?;

    // Build router
    let app = api::create_router(state);

    // Start HTTP server
    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("civic-server HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("Shutting down...");
}
