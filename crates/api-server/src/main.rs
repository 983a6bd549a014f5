//! JSON HTTP API for the communication tracker.
//!
//! Serves CRUD over companies, communication methods, and the append-only
//! communication log, plus the derived views: notifications, reports, and
//! the dashboard rows.

mod config;
mod error;
mod routes;
mod state;

use store::Store;
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting tracker API server");

    // Connect to the store
    let store = Store::connect(&config.database_url).await?;
    store.migrate().await?;

    // Build application state and prime the session snapshot
    let state = AppState::new(store);
    state.reload().await?;

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Tracker API server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
