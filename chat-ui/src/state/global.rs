//! Global Application State
//!
//! Reactive state shared by the authenticated views.

use leptos::*;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Messages shown in the messages view, in display order
    pub messages: RwSignal<Vec<Message>>,
    /// Error message to display
    pub error: RwSignal<Option<String>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
}

/// Chat message as served by the backend
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: u64,
    pub author_nick: String,
    pub content: String,
    pub created_at: String,
}

impl Message {
    /// Timestamp as `dd.mm.yyyy HH:MM`, or the raw value if it does not parse
    pub fn display_time(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_else(|_| self.created_at.clone())
    }
}

/// Built-in list shown before anything is fetched
pub fn fixture_messages() -> Vec<Message> {
    let greetings = [
        "Hej",
        "Co porabiasz?",
        "Co robisz?",
        "Jakie danie dzisiaj jadłeś?",
        "Chcesz pograć?",
        "Wyskoczysz z nami do parku?",
        "Ide do kina",
        "Jestem w sklepie",
    ];

    let first = Message {
        id: 1,
        author_nick: "Michal".to_string(),
        content: "siema".to_string(),
        created_at: "2022-07-18T10:00:00Z".to_string(),
    };

    std::iter::once(first)
        .chain(greetings.iter().enumerate().map(|(i, text)| Message {
            id: i as u64 + 2,
            author_nick: "Michal".to_string(),
            content: text.to_string(),
            created_at: "2022-07-20T10:00:00Z".to_string(),
        }))
        .collect()
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        messages: create_rw_signal(fixture_messages()),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Append a message the backend just stored
    pub fn push_message(&self, message: Message) {
        self.messages.update(|messages| messages.push(message));
    }

    /// Back to the built-in list, dropping whatever the last session fetched or posted
    pub fn reset_messages(&self) {
        self.messages.set(fixture_messages());
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures() {
        let messages = fixture_messages();
        assert_eq!(messages.len(), 9);
        assert_eq!(messages[0].content, "siema");
        assert_eq!(messages[8].content, "Jestem w sklepie");
        assert!(messages.iter().all(|m| m.author_nick == "Michal"));
    }

    #[test]
    fn test_reset_messages_restores_fixtures() {
        let runtime = create_runtime();
        let state = GlobalState {
            messages: create_rw_signal(fixture_messages()),
            error: create_rw_signal(None),
            success: create_rw_signal(None),
        };

        state.push_message(Message {
            id: 100,
            author_nick: "Kuba".to_string(),
            content: "tylko dla Kuby".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        });
        assert_eq!(state.messages.with(Vec::len), 10);

        state.reset_messages();
        assert_eq!(state.messages.get_untracked(), fixture_messages());

        runtime.dispose();
    }

    #[test]
    fn test_display_time() {
        let message = &fixture_messages()[0];
        assert_eq!(message.display_time(), "18.07.2022 10:00");
    }

    #[test]
    fn test_wire_format() {
        let json = r#"{"id":3,"authorNick":"Kuba","content":"hej","createdAt":"2024-01-01T00:00:00Z"}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        assert_eq!(message.author_nick, "Kuba");
    }
}
