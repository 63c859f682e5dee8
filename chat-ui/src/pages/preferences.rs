//! Preferences Page
//!
//! Backend address, stored in local storage.

use leptos::*;

use crate::api;
use crate::state::GlobalState;

#[component]
pub fn Preferences() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (api_url, set_api_url) = create_signal(api::get_api_base());
    let (testing, set_testing) = create_signal(false);

    let test_connection = move |_| {
        set_testing.set(true);
        api::set_api_base(&api_url.get_untracked());

        spawn_local(async move {
            match api::check_health().await {
                Ok(health) => state.show_success(&format!(
                    "Connected, backend v{} {}",
                    health.version, health.status
                )),
                Err(e) => state.show_error(&format!("Connection failed: {}", e)),
            }
            set_testing.set(false);
        });
    };

    let save_url = move |_| {
        api::set_api_base(&api_url.get_untracked());
        state.show_success("API URL saved");
    };

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">"Preferences"</h1>

            <section class="bg-gray-800 rounded-xl p-6">
                <label class="block text-sm text-gray-400 mb-2">"Chat API URL"</label>
                <div class="flex space-x-2">
                    <input
                        type="text"
                        prop:value=move || api_url.get()
                        on:input=move |ev| set_api_url.set(event_target_value(&ev))
                        class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                    <button
                        on:click=test_connection
                        disabled=move || testing.get()
                        class="px-4 py-3 bg-gray-600 hover:bg-gray-500 disabled:bg-gray-700 rounded-lg"
                    >
                        {move || if testing.get() { "Testing..." } else { "Test" }}
                    </button>
                    <button
                        on:click=save_url
                        class="px-4 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg"
                    >
                        "Save"
                    </button>
                </div>
            </section>
        </div>
    }
}
