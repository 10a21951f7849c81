//! The screen surface the picker draws on and reads input from.
//!
//! The focus loop only ever talks to a [`Screen`]; terminal modes, encodings
//! and setup/teardown belong to the implementation.

use crate::error::Result;
use crate::input::events::InputEvent;
use crate::pipeline::wake::Notifier;
use crate::types::Style;

/// Outcome of a blocking poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polled {
    Input(InputEvent),
    /// Woken through the screen's [`Notifier`].
    Wake,
    /// No more input will arrive.
    Closed,
}

pub trait Screen {
    /// Reset every cell to a blank in the default style.
    fn clear(&mut self);

    /// Place `ch` (with optional combining marks) at column `x`, row `y`.
    /// Writes outside the screen are ignored.
    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style);

    /// Current size as (columns, rows).
    fn size(&self) -> (u16, u16);

    /// Make the drawn content visible.
    fn show(&mut self) -> Result<()>;

    /// Re-read the size and repaint everything on the next `show`.
    fn sync(&mut self) -> Result<()>;

    /// Block until an input event, a wake, or the end of input.
    fn poll_event(&mut self) -> Result<Polled>;

    /// Handle that interrupts `poll_event` from another thread.
    fn notifier(&self) -> Notifier;
}
