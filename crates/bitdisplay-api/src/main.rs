//! # bitdisplay-api: Binary Entry Point
//!
//! Starts the Axum HTTP server. Binds to `PORT` (default 8080).

use bitdisplay_api::{ApiConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env();
    tracing::info!(
        cache_capacity = config.cache_capacity,
        image_base = %config.image_base,
        "configuration loaded"
    );

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    let app = bitdisplay_api::app(AppState::with_config(config));

    tracing::info!("bitdisplay API listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
