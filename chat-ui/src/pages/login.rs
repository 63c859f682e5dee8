//! Login Page
//!
//! The only thing shown while no session token is held.

use leptos::*;

use crate::api;
use crate::state::Session;

/// Login form
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");

    let (nickname, set_nickname) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);
    let (notice, set_notice) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // One login request at a time
        if submitting.get_untracked() {
            return;
        }

        let nick = nickname.get_untracked();
        set_submitting.set(true);
        set_notice.set(None);

        spawn_local(async move {
            match api::login(&nick).await {
                Ok(token) => {
                    if !session.on_login_success(token) {
                        set_notice.set(Some("Login response has an empty token".to_string()));
                    }
                }
                Err(e) => set_notice.set(Some(e)),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-center min-h-screen">
            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-8 w-full max-w-sm space-y-4">
                <h1 class="text-2xl font-bold">"Zaloguj się"</h1>

                {move || notice.get().map(|text| view! {
                    <p class="text-sm text-red-400">{text}</p>
                })}

                <label class="block text-sm text-gray-400">"Login"</label>
                <input
                    type="text"
                    prop:value=move || nickname.get()
                    on:input=move |ev| set_nickname.set(event_target_value(&ev))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg py-3 font-semibold transition-colors"
                >
                    {move || if submitting.get() { "Logging in..." } else { "Zaloguj" }}
                </button>
            </form>
        </div>
    }
}
