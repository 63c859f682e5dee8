//! Navigation Component
//!
//! Header bar with the route links and the logout button.

use leptos::*;
use leptos_router::*;

use crate::state::{GlobalState, Session};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_context::<Session>().expect("Session not found");
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let logout = move |_| {
        session.logout();
        state.reset_messages();
    };

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/dashboard" class="text-xl font-bold text-white">
                        "Aplikacja"
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/dashboard" label="Dashboard" />
                        <NavLink href="/messages" label="Messages" />
                        <NavLink href="/preferences" label="Preferences" />
                        <button
                            on:click=logout
                            class="ml-4 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-red-700 transition-colors"
                        >
                            "Logout"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}
