//! Scripted backend for tests

use async_trait::async_trait;
use chrono::Utc;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

use crate::message::Message;
use crate::session::Token;

use super::{Backend, ClientError, ClientResult, Credentials};

/// Backend whose login answers are queued up front
#[derive(Default)]
pub struct MockBackend {
    logins: Mutex<VecDeque<ClientResult<Token>>>,
    messages: Mutex<Vec<Message>>,
    fail_posts: Mutex<Option<u16>>,
    next_id: AtomicU64,
    pub login_calls: AtomicUsize,
    pub post_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    /// When set, login waits for a notification before answering
    pub login_gate: Option<Arc<Notify>>,
    /// When set, posts wait for a notification before answering
    pub post_gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            next_id: AtomicU64::new(100),
            ..Default::default()
        }
    }

    pub fn with_login(self, outcome: ClientResult<Token>) -> Self {
        self.logins.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_token(self, raw: &str) -> Self {
        self.with_login(Ok(Token::new(raw).unwrap()))
    }

    pub fn with_messages(self, messages: Vec<Message>) -> Self {
        *self.messages.lock().unwrap() = messages;
        self
    }

    pub fn failing_posts(self, status: u16) -> Self {
        *self.fail_posts.lock().unwrap() = Some(status);
        self
    }

    pub fn gated(mut self, notify: Arc<Notify>) -> Self {
        self.login_gate = Some(notify);
        self
    }

    pub fn gated_posts(mut self, notify: Arc<Notify>) -> Self {
        self.post_gate = Some(notify);
        self
    }
}

#[async_trait]
impl Backend for MockBackend {
    async fn login(&self, _credentials: &Credentials) -> ClientResult<Token> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.login_gate {
            gate.notified().await;
        }
        self.logins
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ClientError::Unavailable("no scripted answer".to_string())))
    }

    async fn fetch_messages(&self, _token: &Token) -> ClientResult<Vec<Message>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.messages.lock().unwrap().clone())
    }

    async fn post_message(&self, _token: &Token, content: &str) -> ClientResult<Message> {
        self.post_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.post_gate {
            gate.notified().await;
        }
        if let Some(status) = *self.fail_posts.lock().unwrap() {
            return Err(ClientError::Rejected {
                status,
                message: "post failed".to_string(),
            });
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let message = Message::new(id, "Kuba", content, Utc::now());
        self.messages.lock().unwrap().push(message.clone());
        Ok(message)
    }
}
