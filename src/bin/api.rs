//! Chatgate API Server
//!
//! Run with: cargo run --bin chatgate-api
//!
//! # Configuration
//!
//! Read from `config.toml` (see `chatgate-cli config`), then environment:
//! - `CHATGATE_HOST`: Host to bind to (default: 127.0.0.1)
//! - `CHATGATE_PORT`: Port to listen on (default: 8080)
//! - `CHATGATE_SEED_USERS`: Comma-separated nicknames registered at startup
//! - `CHATGATE_LOG_LEVEL` / `CHATGATE_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Full filter, wins over the level above

use chatgate::{logging, serve, AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    logging::init(&config.logging);

    tracing::info!("Starting Chatgate API server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Seed users: {}", config.server.seed_users.join(", "));

    let state = AppState::new(config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Chatgate API server stopped");
    Ok(())
}
