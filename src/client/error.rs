//! Client error types
//!
//! Every backend call ends in `Ok` or one of these. None of them is fatal
//! to the running client.

use thiserror::Error;

/// Errors that can occur when talking to the chat backend
#[derive(Error, Debug)]
pub enum ClientError {
    /// Backend could not be reached
    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    /// Any other transport failure
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Rejected by backend ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Response body could not be understood
    #[error("Malformed response: {0}")]
    Malformed(String),

    /// The same form already has a request in flight
    #[error("A request is already in progress")]
    Busy,

    /// An authenticated call was attempted without a session
    #[error("Not logged in")]
    NotAuthenticated,

    /// A login or logout happened while the request was in flight
    #[error("Session changed while the request was pending")]
    SessionChanged,
}

impl ClientError {
    /// Map a reqwest failure onto the transport variants
    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unavailable(err.to_string())
        } else {
            ClientError::Request(err)
        }
    }

    /// Network-level failure (nothing came back)
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ClientError::Unavailable(_) | ClientError::Timeout | ClientError::Request(_)
        )
    }

    /// HTTP status of a rejection
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Short text for the inline notice on the login form
    pub fn login_notice(&self) -> String {
        match self {
            ClientError::Rejected { status: 400, .. } => "Login request was invalid".to_string(),
            ClientError::Rejected { status: 401 | 403 | 404, .. } => {
                "Login rejected: unknown or unauthorized user".to_string()
            }
            ClientError::Rejected { status, .. } => format!("Login failed (HTTP {})", status),
            ClientError::Malformed(_) => "Login failed: unexpected response from server".to_string(),
            ClientError::Busy => "Login already in progress".to_string(),
            e if e.is_transport() => "Cannot reach the server, try again".to_string(),
            e => e.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
