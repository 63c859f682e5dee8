//! # Chatgate
//!
//! Session-gated chat client. A login form stands in front of a small set of
//! authenticated views (dashboard, messages, preferences); which side is shown
//! depends only on whether a session token is held in memory.
//!
//! ## Modules
//!
//! - [`session`]: the session gate, its token and the in-flight guard
//! - [`client`]: the backend seam and its HTTP implementation
//! - [`views`]: router, composer, screen model and terminal renderer
//! - [`app`]: the app controller wiring it all together
//! - [`server`]: in-memory development backend built with Axum
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chatgate::{ChatApp, ClientConfig, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ClientConfig::default();
//!     let app = ChatApp::new(HttpBackend::new(&config)?, config.base_url());
//!
//!     app.login("Kuba").await?;
//!     app.navigate("/messages").await;
//!     app.set_draft("siema").await;
//!     app.submit_message().await?;
//!
//!     for line in chatgate::views::render(&app.screen().await) {
//!         println!("{}", line);
//!     }
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod client;
pub mod config;
pub mod logging;
pub mod message;
pub mod server;
pub mod session;
pub mod views;

pub use app::ChatApp;
pub use client::{Backend, ClientError, ClientResult, Credentials, HttpBackend};
pub use config::{ClientConfig, Config, ConfigError, LoggingConfig, ServerConfig};
pub use message::{Message, MessageList, MessageRow};
pub use server::{build_router, serve, ApiError, AppState};
pub use session::{GateState, InFlight, SessionGate, Token};
pub use views::{Notice, Route, Screen, View};
