//! Chatgate Browser Client
//!
//! Session-gated chat client built with Leptos (WASM).
//!
//! # Features
//!
//! - Login form gating every other view
//! - Dashboard, messages and preferences behind the gate
//! - Message composer posting to the chat backend
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application compiled to WebAssembly.
//! The session token lives only in a signal, so a page reload logs out.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
