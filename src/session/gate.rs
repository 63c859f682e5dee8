//! Session gate state machine

use crate::client::ClientError;

use super::Token;

/// The two states of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Unauthenticated,
    Authenticated,
}

/// Holds the session token and decides which side of the app is shown
#[derive(Debug, Default)]
pub struct SessionGate {
    token: Option<Token>,
}

impl SessionGate {
    /// New gate, starting Unauthenticated
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        if self.token.is_some() {
            GateState::Authenticated
        } else {
            GateState::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Current token, if logged in
    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Store the token from a successful login.
    ///
    /// Returns `true` when this moved the gate out of Unauthenticated.
    pub fn on_login_success(&mut self, token: Token) -> bool {
        let entered = self.token.is_none();
        self.token = Some(token);
        if entered {
            tracing::info!("Session gate: Unauthenticated -> Authenticated");
        } else {
            tracing::debug!("Session token replaced");
        }
        entered
    }

    /// Apply a login outcome. Only `Ok` touches the token slot.
    pub fn apply(&mut self, outcome: Result<Token, ClientError>) -> Result<(), ClientError> {
        let token = outcome?;
        self.on_login_success(token);
        Ok(())
    }

    /// Clear the session. Returns the dropped token, if there was one.
    pub fn logout(&mut self) -> Option<Token> {
        let previous = self.token.take();
        if previous.is_some() {
            tracing::info!("Session gate: Authenticated -> Unauthenticated");
        }
        previous
    }

    /// Pick exactly one of the two views based on token presence
    pub fn render<T>(
        &self,
        unauthenticated: impl FnOnce() -> T,
        authenticated: impl FnOnce(&Token) -> T,
    ) -> T {
        match &self.token {
            None => unauthenticated(),
            Some(token) => authenticated(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(raw: &str) -> Token {
        Token::new(raw).unwrap()
    }

    fn shows_login(gate: &SessionGate) -> bool {
        gate.render(|| true, |_| false)
    }

    #[test]
    fn test_starts_unauthenticated() {
        let gate = SessionGate::new();
        assert_eq!(gate.state(), GateState::Unauthenticated);
        assert!(gate.token().is_none());
        assert!(shows_login(&gate));
    }

    #[test]
    fn test_login_success_transitions_once() {
        let mut gate = SessionGate::new();
        assert!(gate.on_login_success(token("abc")));
        assert_eq!(gate.state(), GateState::Authenticated);
        assert!(!shows_login(&gate));

        // A second success keeps the gate Authenticated without re-entering
        assert!(!gate.on_login_success(token("def")));
        assert_eq!(gate.token().map(Token::as_str), Some("def"));
    }

    #[test]
    fn test_failed_outcomes_leave_state_unchanged() {
        let mut gate = SessionGate::new();

        let rejected = gate.apply(Err(ClientError::Rejected {
            status: 401,
            message: "invalid".to_string(),
        }));
        assert!(rejected.is_err());
        assert_eq!(gate.state(), GateState::Unauthenticated);

        let unreachable = gate.apply(Err(ClientError::Unavailable("refused".to_string())));
        assert!(unreachable.is_err());
        assert_eq!(gate.state(), GateState::Unauthenticated);

        let malformed = gate.apply(Err(ClientError::Malformed("{}".to_string())));
        assert!(malformed.is_err());
        assert!(shows_login(&gate));
    }

    #[test]
    fn test_failure_after_login_keeps_session() {
        let mut gate = SessionGate::new();
        gate.apply(Ok(token("abc"))).unwrap();

        let _ = gate.apply(Err(ClientError::Timeout));
        assert_eq!(gate.token().map(Token::as_str), Some("abc"));
    }

    #[test]
    fn test_logout_returns_to_login() {
        let mut gate = SessionGate::new();
        gate.on_login_success(token("abc"));

        let dropped = gate.logout();
        assert_eq!(dropped.as_ref().map(Token::as_str), Some("abc"));
        assert_eq!(gate.state(), GateState::Unauthenticated);
        assert!(shows_login(&gate));

        // Logging out twice is a no-op
        assert!(gate.logout().is_none());
    }

    #[test]
    fn test_render_passes_token_down() {
        let mut gate = SessionGate::new();
        gate.on_login_success(token("abc"));

        let seen = gate.render(|| None, |t| Some(t.as_str().to_string()));
        assert_eq!(seen.as_deref(), Some("abc"));
    }
}
