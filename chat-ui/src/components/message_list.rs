//! Message List Component

use leptos::*;

use crate::state::GlobalState;

/// Every message in display order, one row each
#[component]
pub fn MessageList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <ul class="space-y-2">
            <For
                each=move || state.messages.get()
                key=|message| message.id
                children=move |message| {
                    let time = message.display_time();
                    view! {
                        <li class="bg-gray-800 rounded-lg px-4 py-3">
                            <div class="flex items-center justify-between text-sm text-gray-400">
                                <span class="font-semibold text-white">{message.author_nick}</span>
                                <span>{time}</span>
                            </div>
                            <p class="mt-1">{message.content}</p>
                        </li>
                    }
                }
            />
        </ul>
    }
}
