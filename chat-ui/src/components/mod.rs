//! UI Components
//!
//! Reusable Leptos components for the chat views.

pub mod composer;
pub mod message_list;
pub mod nav;
pub mod todos;
pub mod toast;

pub use composer::Composer;
pub use message_list::MessageList;
pub use nav::Nav;
pub use todos::TodosButton;
pub use toast::Toast;
