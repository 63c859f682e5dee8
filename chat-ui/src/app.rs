//! App Root Component
//!
//! Session gate at the top: the login page while no token is held, the
//! routed views once one is.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Dashboard, Login, Messages, Preferences};
use crate::state::{provide_global_state, provide_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let session = provide_session();
    provide_global_state();

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Show when=move || session.is_authenticated() fallback=|| view! { <Login /> }>
                <Authenticated />
            </Show>
            <Toast />
        </div>
    }
}

/// Routed views behind the gate
#[component]
fn Authenticated() -> impl IntoView {
    view! {
        <Router>
            <Nav />
            <main class="flex-1 container mx-auto px-4 py-8">
                <Routes>
                    <Route path="/" view=Dashboard />
                    <Route path="/dashboard" view=Dashboard />
                    <Route path="/preferences" view=Preferences />
                    <Route path="/messages" view=Messages />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"Nothing lives at this address."</p>
            <A
                href="/dashboard"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Go to Dashboard"
            </A>
        </div>
    }
}
