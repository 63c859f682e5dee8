//! Placeholder Todos Button
//!
//! Fetches a handful of todos and logs them to the browser console.

use leptos::*;

use crate::api;
use crate::state::GlobalState;

const TODO_LIMIT: u32 = 5;

#[component]
pub fn TodosButton() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (loading, set_loading) = create_signal(false);

    let on_click = move |_| {
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_todos(TODO_LIMIT).await {
                Ok(todos) => {
                    for todo in &todos {
                        web_sys::console::log_1(&format!("todo {}: {}", todo.id, todo.title).into());
                    }
                    state.show_success(&format!("Fetched {} todos", todos.len()));
                }
                Err(e) => state.show_error(&e),
            }
            set_loading.set(false);
        });
    };

    view! {
        <button
            on:click=on_click
            disabled=move || loading.get()
            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 rounded-lg"
        >
            "Get"
        </button>
    }
}
