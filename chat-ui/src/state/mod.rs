//! State Management
//!
//! Session token and shared view state.

pub mod global;
pub mod session;

pub use global::{provide_global_state, GlobalState, Message};
pub use session::{provide_session, Session};
