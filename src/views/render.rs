//! Terminal presentation
//!
//! Turns a [`Screen`] into lines of text. No decisions are made here.

use crate::message::MessageRow;

use super::{AuthenticatedScreen, LoginScreen, Notice, NoticeKind, Route, Screen, View};

/// Render a screen to printable lines
pub fn render(screen: &Screen) -> Vec<String> {
    match screen {
        Screen::Login(login) => render_login(login),
        Screen::Authenticated(auth) => render_authenticated(auth),
    }
}

fn render_login(login: &LoginScreen) -> Vec<String> {
    let mut lines = vec!["== Zaloguj się ==".to_string()];
    if let Some(notice) = &login.notice {
        lines.push(notice_line(notice));
    }
    if login.pending {
        lines.push("Logging in...".to_string());
    } else {
        lines.push("Login:".to_string());
    }
    lines
}

fn render_authenticated(screen: &AuthenticatedScreen) -> Vec<String> {
    let nav: Vec<String> = Route::NAV
        .iter()
        .map(|route| {
            if *route == screen.route {
                format!("[{}]", route.title())
            } else {
                route.title().to_string()
            }
        })
        .collect();

    let mut lines = vec!["== Aplikacja ==".to_string(), nav.join(" | ")];
    if let Some(notice) = &screen.notice {
        lines.push(notice_line(notice));
    }
    lines.push(String::new());
    lines.extend(render_view(&screen.view));
    lines
}

fn render_view(view: &View) -> Vec<String> {
    match view {
        View::Dashboard {
            message_count,
            latest,
        } => {
            let mut lines = vec![format!("{} messages", message_count)];
            if let Some(row) = latest {
                lines.push("Latest:".to_string());
                lines.extend(message_lines(row));
            }
            lines
        }
        View::Preferences { api_url } => vec![
            "Preferences".to_string(),
            format!("  Server: {}", api_url),
        ],
        View::Messages {
            rows,
            draft,
            submitting,
        } => {
            let mut lines: Vec<String> = rows.iter().flat_map(message_lines).collect();
            if rows.is_empty() {
                lines.push("(no messages)".to_string());
            }
            lines.push(String::new());
            if *submitting {
                lines.push("Sending...".to_string());
            } else {
                lines.push(format!("> {}", draft));
            }
            lines
        }
        View::NotFound { path } => vec![format!("Page not found: {}", path)],
    }
}

fn message_lines(row: &MessageRow) -> Vec<String> {
    vec![
        format!("{} ({})", row.author, row.timestamp),
        format!("  {}", row.content),
    ]
}

fn notice_line(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Error => format!("! {}", notice.text),
        NoticeKind::Info => format!("* {}", notice.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(content: &str) -> MessageRow {
        MessageRow {
            author: "Michal".to_string(),
            content: content.to_string(),
            timestamp: "18.07.2022 10:00".to_string(),
        }
    }

    #[test]
    fn test_login_shows_error() {
        let screen = Screen::Login(LoginScreen {
            notice: Some(Notice::error("Login rejected")),
            pending: false,
        });
        let lines = render(&screen);
        assert!(lines.iter().any(|l| l == "! Login rejected"));
        assert!(lines.iter().any(|l| l == "Login:"));
    }

    #[test]
    fn test_messages_rendered_in_order() {
        let screen = Screen::Authenticated(AuthenticatedScreen {
            route: Route::Messages,
            view: View::Messages {
                rows: vec![row("Hej"), row("siema")],
                draft: "co".to_string(),
                submitting: false,
            },
            notice: None,
        });

        let lines = render(&screen);
        assert_eq!(lines, render(&screen));
        assert!(lines.contains(&"Dashboard | [Messages] | Preferences".to_string()));

        let hej = lines.iter().position(|l| l == "  Hej").unwrap();
        let siema = lines.iter().position(|l| l == "  siema").unwrap();
        assert!(hej < siema);
        assert_eq!(lines.last().map(String::as_str), Some("> co"));
    }

    #[test]
    fn test_not_found_view() {
        let screen = Screen::Authenticated(AuthenticatedScreen {
            route: Route::NotFound,
            view: View::NotFound {
                path: "/nope".to_string(),
            },
            notice: Some(Notice::info("hello")),
        });
        let lines = render(&screen);
        assert!(lines.contains(&"Page not found: /nope".to_string()));
        assert!(lines.contains(&"* hello".to_string()));
    }
}
