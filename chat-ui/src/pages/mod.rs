//! Pages
//!
//! Top-level page components: the login form and one page per route.

pub mod dashboard;
pub mod login;
pub mod messages;
pub mod preferences;

pub use dashboard::Dashboard;
pub use login::Login;
pub use messages::Messages;
pub use preferences::Preferences;
