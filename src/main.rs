//! Binary entrypoint for the staffing engine HTTP service.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use staffing_engine::api::{AppState, create_router};
use staffing_engine::directory::RosterLoader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("staffing_engine=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Starting staffing engine");

    let config_dir = env::var("STAFFING_CONFIG").unwrap_or_else(|_| "./config".to_string());
    let directory = RosterLoader::load(&config_dir)?;
    info!(employees = directory.len(), "Seed roster loaded");

    let router = create_router(AppState::new(directory));

    let bind_addr = env::var("STAFFING_BIND").unwrap_or_else(|_| "127.0.0.1:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
