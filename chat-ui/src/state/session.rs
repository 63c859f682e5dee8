//! Session Gate
//!
//! Holds the session token in memory. `None` shows the login form, `Some`
//! shows the routed views. Nothing else decides which side is rendered.

use leptos::*;

/// Session slot provided to the component tree
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.with(Option::is_some)
    }

    /// Store a token handed back by a successful login.
    ///
    /// Blank tokens are ignored so the gate cannot open on an empty answer.
    pub fn on_login_success(&self, token: String) -> bool {
        match accept_token(token) {
            Some(token) => {
                self.token.set(Some(token));
                true
            }
            None => false,
        }
    }

    pub fn logout(&self) {
        self.token.set(None);
    }
}

fn accept_token(token: String) -> Option<String> {
    if token.trim().is_empty() {
        None
    } else {
        Some(token)
    }
}

/// Provide an empty session to the component tree
pub fn provide_session() -> Session {
    let session = Session {
        token: create_rw_signal(None),
    };
    provide_context(session);
    session
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_rejected() {
        assert_eq!(accept_token(String::new()), None);
        assert_eq!(accept_token("   ".to_string()), None);
        assert_eq!(accept_token("abc".to_string()), Some("abc".to_string()));
    }
}
