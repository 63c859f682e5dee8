//! Session Gate
//!
//! The single authority for the authenticated/unauthenticated decision.
//!
//! ## State machine
//!
//! ```text
//!                 login Ok
//! Unauthenticated ─────────► Authenticated
//!        ▲                        │
//!        └──────── logout ────────┘
//! ```
//!
//! A failed login never moves the gate. The token is the only thing the
//! gate knows about the user.

mod gate;
mod guard;
mod token;

pub use gate::{GateState, SessionGate};
pub use guard::{InFlight, InFlightGuard};
pub use token::Token;
