//! Dashboard Page

use leptos::*;
use leptos_router::*;

use crate::components::TodosButton;
use crate::state::GlobalState;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let count = move || state.messages.with(Vec::len);
    let latest = move || {
        state.messages.with(|messages| {
            messages
                .last()
                .map(|m| format!("{}: {}", m.author_nick, m.content))
                .unwrap_or_else(|| "No messages yet".to_string())
        })
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Dashboard"</h1>

            <section class="bg-gray-800 rounded-xl p-6 space-y-2">
                <p>{move || format!("{} messages", count())}</p>
                <p class="text-gray-400">{latest}</p>
                <A href="/messages" class="text-primary-400 hover:underline">"Open messages"</A>
            </section>

            <TodosButton />
        </div>
    }
}
