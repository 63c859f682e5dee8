//! Backend API Client
//!
//! - [`Backend`]: the seam between the app and the chat backend
//! - [`HttpBackend`]: reqwest implementation against the REST API
//! - [`placeholder`]: the standalone todo fetch

mod backend;
mod error;
mod http;
pub mod placeholder;

#[cfg(test)]
pub(crate) mod mock;

pub use backend::{Backend, Credentials};
pub use error::{ClientError, ClientResult};
pub use http::{parse_token, HttpBackend};
