//! Opaque session token

use std::fmt;

/// Credential issued by the backend on a successful login.
///
/// The client assumes nothing about its contents. `Debug` is redacted so a
/// token never lands in a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token value. Returns `None` for blank input.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Raw token value, for building request headers
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_token_rejected() {
        assert!(Token::new("").is_none());
        assert!(Token::new("   ").is_none());
        assert!(Token::new("abc").is_some());
    }

    #[test]
    fn test_debug_is_redacted() {
        let token = Token::new("super-secret").unwrap();
        let printed = format!("{:?}", token);
        assert!(!printed.contains("super-secret"));
    }

    #[test]
    fn test_bearer_header() {
        let token = Token::new("abc").unwrap();
        assert_eq!(token.bearer(), "Bearer abc");
    }
}
