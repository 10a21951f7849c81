//! Differential renderer for the terminal screen.
//!
//! The DiffRenderer compares the current frame to the previous frame and only
//! outputs cells that have changed.
//!
//! # Algorithm
//!
//! 1. Wrap output in a synchronized update
//! 2. For each cell in the new frame:
//!    - If previous frame exists and cell is unchanged: skip
//!    - Otherwise: move (if needed), restyle (if needed), print
//! 3. Flush the writer once
//! 4. Store current frame as previous for next comparison

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};

use super::buffer::{Cell, FrameBuffer};
use crate::types::{Attr, Rgba, Style};

/// Keeps the previous frame so only changed cells are written.
#[derive(Debug, Default)]
pub struct DiffRenderer {
    previous: Option<FrameBuffer>,
}

impl DiffRenderer {
    pub fn new() -> Self {
        Self { previous: None }
    }

    /// Render a frame to `out`, writing only cells that changed.
    ///
    /// Returns the number of cells written.
    pub fn render<W: Write>(&mut self, out: &mut W, buffer: &FrameBuffer) -> io::Result<usize> {
        let previous = self
            .previous
            .as_ref()
            .filter(|prev| prev.width() == buffer.width() && prev.height() == buffer.height());

        queue!(out, BeginSynchronizedUpdate)?;

        let mut written = 0;
        let mut cursor: Option<(u16, u16)> = None;
        let mut style: Option<Style> = None;

        for y in 0..buffer.height() {
            // Set when the old frame had a wide glyph in the previous column.
            let mut force = false;
            let mut x = 0;
            while x < buffer.width() {
                let Some(cell) = buffer.get(x, y) else { break };
                let old = previous.and_then(|prev| prev.get(x, y));
                let changed = force || old != Some(cell);
                force = old.is_some_and(|old| old.width() > 1);

                if changed {
                    if cursor != Some((x, y)) {
                        queue!(out, MoveTo(x, y))?;
                    }
                    if style != Some(cell.style) {
                        apply_style(out, cell.style)?;
                        style = Some(cell.style);
                    }
                    queue!(out, Print(cell.symbol()))?;
                    written += 1;
                }

                x = x.saturating_add(cell_advance(cell));
                cursor = if changed { Some((x, y)) } else { cursor };
            }
        }

        queue!(out, ResetColor, EndSynchronizedUpdate)?;
        out.flush()?;

        self.previous = Some(buffer.clone());
        Ok(written)
    }

    /// Invalidate the previous frame.
    ///
    /// Next render will be a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

/// Columns the terminal cursor moves after printing `cell`.
#[inline]
fn cell_advance(cell: &Cell) -> u16 {
    cell.width().max(1)
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(to_color(style.fg)),
        SetBackgroundColor(to_color(style.bg)),
    )?;
    for (flag, attribute) in [
        (Attr::BOLD, Attribute::Bold),
        (Attr::DIM, Attribute::Dim),
        (Attr::ITALIC, Attribute::Italic),
        (Attr::UNDERLINE, Attribute::Underlined),
        (Attr::INVERSE, Attribute::Reverse),
    ] {
        if style.attrs.contains(flag) {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

/// Map a render color onto crossterm's color model.
pub fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if let Some(index) = color.ansi_index() {
        Color::AnsiValue(index)
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}
