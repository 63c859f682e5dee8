//! App Controller
//!
//! Ties the session gate, the router, the message list and the composer
//! together and exposes the user actions. `ChatApp` is a cheap handle; clones
//! share one state.
//!
//! The state lock is never held across a backend call, so `screen()` stays
//! available while a request is pending. Every login and logout bumps a
//! session generation; a response that comes back under a different
//! generation than it was sent under is dropped.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{Backend, ClientError, ClientResult, Credentials};
use crate::message::{MessageList, MessageRow};
use crate::session::{GateState, InFlight, SessionGate};
use crate::views::{AuthenticatedScreen, Composer, LoginScreen, Notice, Route, Screen, View};

/// Client application state
struct ClientState {
    gate: SessionGate,
    login_flight: InFlight,
    login_notice: Option<Notice>,
    path: String,
    route: Route,
    /// Bumped on every login and logout
    generation: u64,
    messages: MessageList,
    /// List restored on logout
    initial_messages: MessageList,
    composer: Composer,
    notice: Option<Notice>,
}

impl ClientState {
    /// Check that no login or logout happened since `generation` was read
    fn ensure_generation(&self, generation: u64) -> ClientResult<()> {
        if self.generation == generation {
            Ok(())
        } else {
            tracing::debug!(sent = generation, now = self.generation, "Dropping stale response");
            Err(ClientError::SessionChanged)
        }
    }
}

/// Chat client application
pub struct ChatApp<B> {
    backend: Arc<B>,
    state: Arc<RwLock<ClientState>>,
    api_url: String,
}

impl<B> Clone for ChatApp<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            state: Arc::clone(&self.state),
            api_url: self.api_url.clone(),
        }
    }
}

impl<B: Backend> ChatApp<B> {
    /// New app, Unauthenticated, showing the built-in message list
    pub fn new(backend: B, api_url: impl Into<String>) -> Self {
        Self::with_messages(backend, api_url, MessageList::fixtures())
    }

    pub fn with_messages(backend: B, api_url: impl Into<String>, messages: MessageList) -> Self {
        let state = ClientState {
            gate: SessionGate::new(),
            login_flight: InFlight::new(),
            login_notice: None,
            path: Route::default().path().to_string(),
            route: Route::default(),
            generation: 0,
            initial_messages: messages.clone(),
            messages,
            composer: Composer::new(),
            notice: None,
        };

        Self {
            backend: Arc::new(backend),
            state: Arc::new(RwLock::new(state)),
            api_url: api_url.into(),
        }
    }

    pub async fn gate_state(&self) -> GateState {
        self.state.read().await.gate.state()
    }

    /// Submit the login form.
    ///
    /// The gate moves only when the backend hands back a token. Any failure
    /// leaves it where it was and puts an error notice on the login form.
    pub async fn login(&self, nickname: impl Into<String>) -> ClientResult<()> {
        let credentials = Credentials::new(nickname);

        let (_guard, generation) = {
            let state = self.state.read().await;
            let guard = state.login_flight.try_begin().ok_or(ClientError::Busy)?;
            (guard, state.generation)
        };

        let outcome = self.backend.login(&credentials).await;
        drop(credentials);

        let mut state = self.state.write().await;
        state.ensure_generation(generation)?;
        match state.gate.apply(outcome) {
            Ok(()) => {
                state.generation += 1;
                state.login_notice = None;
                state.notice = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Login failed");
                state.login_notice = Some(Notice::error(e.login_notice()));
                Err(e)
            }
        }
    }

    /// Drop the session and go back to the login form
    pub async fn logout(&self) {
        let mut state = self.state.write().await;
        state.gate.logout();
        state.generation += 1;
        let initial = state.initial_messages.clone();
        state.messages = initial;
        state.composer.clear();
        state.notice = None;
        state.login_notice = Some(Notice::info("Logged out"));
        state.route = Route::default();
        state.path = Route::default().path().to_string();
    }

    /// Switch the authenticated view
    pub async fn navigate(&self, path: &str) -> Route {
        let route = Route::resolve(path);
        let mut state = self.state.write().await;
        state.route = route;
        state.path = path.trim().to_string();
        route
    }

    pub async fn set_draft(&self, text: impl Into<String>) {
        self.state.write().await.composer.set_draft(text);
    }

    /// Post the current draft and append the stored message to the list.
    ///
    /// The session slot is not touched by anything this returns.
    pub async fn submit_message(&self) -> ClientResult<()> {
        let (_guard, content, token, generation) = {
            let state = self.state.read().await;
            let token = state
                .gate
                .token()
                .cloned()
                .ok_or(ClientError::NotAuthenticated)?;
            let (guard, content) = state.composer.begin_submit().ok_or(ClientError::Busy)?;
            (guard, content, token, state.generation)
        };

        let outcome = self.backend.post_message(&token, &content).await;

        let mut state = self.state.write().await;
        state.ensure_generation(generation)?;
        match outcome {
            Ok(message) => {
                tracing::info!(id = message.id, "Message posted");
                state.messages.push(message);
                state.composer.clear();
                state.notice = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Posting message failed");
                state.notice = Some(Notice::error(format!("Message not sent: {}", e)));
                Err(e)
            }
        }
    }

    /// Replace the message list with the backend's
    pub async fn refresh_messages(&self) -> ClientResult<usize> {
        let (token, generation) = {
            let state = self.state.read().await;
            let token = state
                .gate
                .token()
                .cloned()
                .ok_or(ClientError::NotAuthenticated)?;
            (token, state.generation)
        };

        let outcome = self.backend.fetch_messages(&token).await;

        let mut state = self.state.write().await;
        state.ensure_generation(generation)?;
        match outcome {
            Ok(messages) => {
                let count = messages.len();
                tracing::debug!(count, "Messages refreshed");
                state.messages.replace_all(messages);
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetching messages failed");
                state.notice = Some(Notice::error(format!("Could not load messages: {}", e)));
                Err(e)
            }
        }
    }

    /// Snapshot of what should be on screen right now
    pub async fn screen(&self) -> Screen {
        let state = self.state.read().await;

        state.gate.render(
            || {
                Screen::Login(LoginScreen {
                    notice: state.login_notice.clone(),
                    pending: state.login_flight.is_pending(),
                })
            },
            |_token| {
                Screen::Authenticated(AuthenticatedScreen {
                    route: state.route,
                    view: self.view(&state),
                    notice: state.notice.clone(),
                })
            },
        )
    }

    fn view(&self, state: &ClientState) -> View {
        match state.route {
            Route::Dashboard => View::Dashboard {
                message_count: state.messages.len(),
                latest: state.messages.last().map(MessageRow::from),
            },
            Route::Preferences => View::Preferences {
                api_url: self.api_url.clone(),
            },
            Route::Messages => View::Messages {
                rows: state.messages.rows().collect(),
                draft: state.composer.draft().to_string(),
                submitting: state.composer.is_submitting(),
            },
            Route::NotFound => View::NotFound {
                path: state.path.clone(),
            },
        }
    }
}
