//! Views
//!
//! Router, composer state, screen model and the terminal renderer.

mod composer;
mod render;
mod router;
mod screen;

pub use composer::Composer;
pub use render::render;
pub use router::Route;
pub use screen::{AuthenticatedScreen, LoginScreen, Notice, NoticeKind, Screen, View};
