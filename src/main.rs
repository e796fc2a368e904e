//! StaffHub - application entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use staffhub::api::{create_router, AppState};
use staffhub::config::Config;
use staffhub::errors::{AppError, AppResult};
use staffhub::infra::Database;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env();
    tracing::debug!("Configuration loaded: {:?}", config);

    if let Err(e) = run(config).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> AppResult<()> {
    let database = Arc::new(Database::connect(&config).await?);

    let state = AppState::from_config(database, &config);
    let app = create_router(state);

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::upstream(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::upstream(format!("Server error: {}", e)))
}

/// Initialize tracing subscriber
fn init_tracing() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
