//! Backend API seam

use async_trait::async_trait;
use serde::Serialize;

use crate::message::Message;
use crate::session::Token;

use super::ClientResult;

/// Login payload. Built at submit time, sent once, then dropped.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub nickname: String,
}

impl Credentials {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

/// The chat backend as seen by the client
#[async_trait]
pub trait Backend: Send + Sync {
    /// Exchange credentials for a session token
    async fn login(&self, credentials: &Credentials) -> ClientResult<Token>;

    /// Fetch the message list
    async fn fetch_messages(&self, token: &Token) -> ClientResult<Vec<Message>>;

    /// Post a message. Returns the message as stored by the backend.
    async fn post_message(&self, token: &Token, content: &str) -> ClientResult<Message>;
}
