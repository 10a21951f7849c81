//! Session pipeline
//!
//! Connects input, state and rendering for one picker session.
//!
//! # Pipeline Architecture
//!
//! ```text
//! InputReader ─┐
//!              ├─► screen channel ─► FocusLoop ─► Selection ─► Screen::show
//! Notifier ────┘                        │
//!                                       └─► Debouncer ─► Choice
//! ```
//!
//! - [`focus`]: the controller loop and session outcome
//! - [`terminal`]: the crossterm-backed [`Screen`](crate::renderer::Screen)
//! - [`wake`]: the channel message type and wake handle

pub mod focus;
pub mod terminal;
pub mod wake;

pub use focus::{FocusLoop, Outcome, SessionState};
pub use terminal::TerminalScreen;
pub use wake::{Notifier, ScreenMessage};
