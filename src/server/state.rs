//! Application State
//!
//! Shared state accessible by all handlers. Everything lives in memory and
//! is gone when the process exits.

use chrono::Utc;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ServerConfig;
use crate::message::Message;

use super::dto::UserDto;
use super::error::{ApiError, ApiResult};

/// A registered user
#[derive(Debug, Clone)]
pub struct User {
    pub nickname: String,
    pub email: Option<String>,
}

/// A message as stored, including soft-delete state
#[derive(Debug, Clone)]
struct StoredMessage {
    message: Message,
    deleted: bool,
}

#[derive(Debug, Default)]
struct Store {
    users: BTreeMap<String, User>,
    messages: Vec<StoredMessage>,
    /// Issued token -> nickname
    sessions: HashMap<String, String>,
    next_message_id: u64,
}

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<Store>>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state with the configured seed users registered
    pub fn new(config: ServerConfig) -> Self {
        let mut store = Store {
            next_message_id: 1,
            ..Default::default()
        };
        for nickname in &config.seed_users {
            store.users.insert(
                nickname.clone(),
                User {
                    nickname: nickname.clone(),
                    email: None,
                },
            );
        }

        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub async fn register_user(&self, nickname: String, email: Option<String>) -> ApiResult<User> {
        let mut store = self.store.write().await;
        if store.users.contains_key(&nickname) {
            return Err(ApiError::UserExists(nickname));
        }
        let user = User { nickname, email };
        store.users.insert(user.nickname.clone(), user.clone());
        tracing::info!(nickname = %user.nickname, "User registered");
        Ok(user)
    }

    pub async fn list_users(&self) -> Vec<UserDto> {
        self.store
            .read()
            .await
            .users
            .values()
            .map(UserDto::from)
            .collect()
    }

    /// Opaque token for an existing user. A user keeps one token; logging in
    /// again hands back the one already issued.
    pub async fn issue_token(&self, nickname: &str) -> ApiResult<String> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(nickname) {
            return Err(ApiError::NotFound(format!("user {}", nickname)));
        }
        let existing = store
            .sessions
            .iter()
            .find(|(_, owner)| owner.as_str() == nickname)
            .map(|(token, _)| token.clone());
        if let Some(token) = existing {
            return Ok(token);
        }
        let token = uuid::Uuid::new_v4().simple().to_string();
        store.sessions.insert(token.clone(), nickname.to_string());
        tracing::info!(nickname = %nickname, "Token issued");
        Ok(token)
    }

    /// Nickname owning the token, if the token was issued here
    pub async fn authenticate(&self, token: &str) -> Option<String> {
        self.store.read().await.sessions.get(token).cloned()
    }

    /// Messages not deleted, ascending id
    pub async fn list_messages(&self) -> Vec<Message> {
        self.store
            .read()
            .await
            .messages
            .iter()
            .filter(|stored| !stored.deleted)
            .map(|stored| stored.message.clone())
            .collect()
    }

    pub async fn get_message(&self, id: u64) -> ApiResult<Message> {
        let store = self.store.read().await;
        store
            .messages
            .iter()
            .find(|stored| stored.message.id == id && !stored.deleted)
            .map(|stored| stored.message.clone())
            .ok_or_else(|| ApiError::NotFound(format!("message {}", id)))
    }

    pub async fn create_message(&self, author: &str, content: String) -> ApiResult<Message> {
        let mut store = self.store.write().await;
        if !store.users.contains_key(author) {
            return Err(ApiError::NotFound(format!("user {}", author)));
        }

        let id = store.next_message_id;
        store.next_message_id += 1;

        let message = Message::new(id, author, content, Utc::now());
        store.messages.push(StoredMessage {
            message: message.clone(),
            deleted: false,
        });
        Ok(message)
    }

    /// Edit or soft-delete a message. Only its author may do either.
    pub async fn update_message(
        &self,
        id: u64,
        caller: &str,
        content: Option<String>,
        delete: bool,
    ) -> ApiResult<Message> {
        let mut store = self.store.write().await;
        let stored = store
            .messages
            .iter_mut()
            .find(|stored| stored.message.id == id && !stored.deleted)
            .ok_or_else(|| ApiError::NotFound(format!("message {}", id)))?;

        if stored.message.author != caller {
            return Err(ApiError::Forbidden(format!(
                "{} is not the author of message {}",
                caller, id
            )));
        }

        if let Some(content) = content {
            stored.message.content = content;
        }
        stored.deleted = delete;
        Ok(stored.message.clone())
    }
}
