//! Rendering
//!
//! - [`screen`]: the `Screen` trait the focus loop draws through
//! - [`glyph`]: places flowed text as cells
//! - [`buffer`]: the cell grid
//! - [`diff`]: writes only changed cells to the terminal
//! - [`memory`]: an in-memory screen for tests and headless runs

pub mod buffer;
pub mod diff;
pub mod glyph;
pub mod memory;
pub mod screen;

pub use buffer::{Cell, FrameBuffer};
pub use diff::DiffRenderer;
pub use glyph::{draw_line, TextBlock};
pub use memory::{EventFeed, MemoryScreen};
pub use screen::{Polled, Screen};
