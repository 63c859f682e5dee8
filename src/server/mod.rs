//! Development Backend
//!
//! In-memory chat backend built with Axum, serving the API the client talks to.
//!
//! # Endpoints
//!
//! ## Login
//! - `POST /login` - Exchange `{nickname}` for `{token}` (also `POST /Login`)
//!
//! ## Users
//! - `GET /users` - List users
//! - `POST /users` - Register a user
//!
//! ## Messages (bearer token required)
//! - `GET /messages` - List messages
//! - `POST /messages` - Post a message
//! - `GET /messages/:id` - Get a message
//! - `PUT /messages/:id` - Edit own message
//! - `DELETE /messages/:id` - Delete own message
//!
//! ## Health
//! - `GET /health` - Status, uptime and version

pub mod auth;
pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{AppState, User};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/login", post(routes::login::login))
        .route("/Login", post(routes::login::login))
        .route(
            "/users",
            get(routes::users::list_users).post(routes::users::create_user),
        )
        .route(
            "/messages",
            get(routes::messages::list_messages).post(routes::messages::create_message),
        )
        .route(
            "/messages/:id",
            get(routes::messages::get_message)
                .put(routes::messages::update_message)
                .delete(routes::messages::delete_message),
        )
        .route("/health", get(routes::health::health))
        .layer(TraceLayer::new_for_http())
        // The browser client is served from a different origin
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Chatgate API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Chatgate API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
