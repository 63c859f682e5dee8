//! Messages Page
//!
//! Message list with the composer underneath. The list starts from the
//! built-in messages and is replaced by the backend's on "Refresh".

use leptos::*;

use crate::api;
use crate::components::{Composer, MessageList};
use crate::state::{GlobalState, Session};

#[component]
pub fn Messages() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let session = use_context::<Session>().expect("Session not found");
    let (loading, set_loading) = create_signal(false);

    let refresh = move |_| {
        let Some(token) = session.token() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_messages(&token).await {
                Ok(messages) => state.messages.set(messages),
                Err(e) => state.show_error(&format!("Could not load messages: {}", e)),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Messages"</h1>
                <button
                    on:click=refresh
                    disabled=move || loading.get()
                    class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 rounded-lg"
                >
                    {move || if loading.get() { "Loading..." } else { "Refresh" }}
                </button>
            </div>

            <MessageList />
            <Composer />
        </div>
    }
}
