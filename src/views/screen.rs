//! What the presentation layer is asked to draw

use crate::message::MessageRow;

use super::Route;

/// Inline, non-blocking notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Top-level screen: exactly one of the two gate branches
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Login(LoginScreen),
    Authenticated(AuthenticatedScreen),
}

impl Screen {
    pub fn is_login(&self) -> bool {
        matches!(self, Screen::Login(_))
    }

    /// Error indicator on the login form, if any
    pub fn login_error(&self) -> Option<&Notice> {
        match self {
            Screen::Login(login) => login.notice.as_ref().filter(|n| n.is_error()),
            Screen::Authenticated(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginScreen {
    pub notice: Option<Notice>,
    /// A login request is in flight; the submit control is disabled
    pub pending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedScreen {
    pub route: Route,
    pub view: View,
    pub notice: Option<Notice>,
}

/// Leaf views behind the gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Dashboard {
        message_count: usize,
        latest: Option<MessageRow>,
    },
    Preferences {
        api_url: String,
    },
    Messages {
        rows: Vec<MessageRow>,
        draft: String,
        submitting: bool,
    },
    NotFound {
        path: String,
    },
}
