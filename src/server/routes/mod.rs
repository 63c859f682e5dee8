//! API Routes
//!
//! Route handlers organized by functionality.

pub mod health;
pub mod login;
pub mod messages;
pub mod users;
