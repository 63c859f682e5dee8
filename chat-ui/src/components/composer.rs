//! Composer Component
//!
//! Text input and send button. The draft is cleared only after the backend
//! accepts the message; on failure it stays so nothing typed is lost.

use leptos::*;

use crate::api;
use crate::state::{GlobalState, Session};

/// Message composer
#[component]
pub fn Composer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");

    let (draft, set_draft) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if submitting.get_untracked() {
            return;
        }
        let Some(token) = session.token() else {
            return;
        };

        let content = draft.get_untracked();
        set_submitting.set(true);

        spawn_local(async move {
            let outcome = api::post_message(&token, &content).await;
            // Logged out (or in again) meanwhile: the answer belongs to a gone session
            if session.token().as_deref() != Some(token.as_str()) {
                return;
            }
            match outcome {
                Ok(message) => {
                    state.push_message(message);
                    set_draft.set(String::new());
                }
                Err(e) => {
                    state.show_error(&format!("Message not sent: {}", e));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2 mt-4">
            <input
                type="text"
                placeholder="Napisz wiadomość"
                prop:value=move || draft.get()
                on:input=move |ev| set_draft.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Sending..." } else { "Send" }}
            </button>
        </form>
    }
}
