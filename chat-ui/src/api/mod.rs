//! API Module
//!
//! HTTP calls to the chat backend and the placeholder todo service.

pub mod client;

pub use client::*;
