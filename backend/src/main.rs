//! AgriSmart Advisory Platform - Backend Server

use std::{net::SocketAddr, sync::Arc};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use agrismart_backend::storage::{MemStorage, Storage};
use agrismart_backend::{create_app, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agrismart_backend=debug,agrismart_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting AgriSmart Advisory Server");
    tracing::info!("Environment: {}", config.environment);

    // Seed the in-memory store
    let storage: Arc<dyn Storage> = Arc::new(MemStorage::new());
    tracing::info!("In-memory store seeded with sample weather and market data");

    // Create application state
    let state = AppState {
        storage,
        config: Arc::new(config.clone()),
    };

    // Build application
    let app = create_app(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
