//! # urlpick
//!
//! Pick one entry from a short list in the terminal.
//!
//! ## Architecture
//!
//! A session is a [`FocusLoop`] over a [`Screen`]. The loop owns a
//! [`Selection`] and a [`Debouncer`] thread that turns typed digits into
//! index jumps; the debouncer wakes the loop through the screen's
//! [`Notifier`] whenever it resolves one.
//!
//! ```text
//! Screen::poll_event → FocusLoop → Selection → flow → TextBlock → Screen::show
//!                          └─► Debouncer ─► Choice + wake
//! ```
//!
//! ## Modules
//!
//! - [`layout`] - Display width and text flow
//! - [`renderer`] - Screen trait, glyph placement, cell buffer, diff output
//! - [`state`] - Selection model
//! - [`input`] - Key events, terminal reader, typed-index debouncer
//! - [`pipeline`] - Focus loop, terminal screen, wake channel
//! - [`scan`] - URL candidates in free text

pub mod config;
pub mod error;
pub mod input;
pub mod layout;
pub mod pipeline;
pub mod renderer;
pub mod scan;
pub mod state;
pub mod types;

pub use config::PickerConfig;
pub use error::{Error, Result};
pub use input::{Choice, Debouncer, InputEvent, Key};
pub use layout::{char_width, flow, flow_height, flow_into, line_width, string_width};
pub use pipeline::{FocusLoop, Notifier, Outcome, SessionState, TerminalScreen};
pub use renderer::{MemoryScreen, Polled, Screen, TextBlock};
pub use state::Selection;
pub use types::{Attr, Rgba, Style, Theme};

/// Run a picker over `options` on the real terminal.
///
/// The terminal is restored before this returns.
pub fn pick(options: Vec<String>, config: PickerConfig) -> Result<Outcome> {
    let screen = TerminalScreen::new()?;
    let mut picker = FocusLoop::new(screen, options, config)?;
    picker.run()
}
