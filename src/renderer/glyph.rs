//! Glyph placement.
//!
//! Turns flowed lines into screen cells. Each character advances the cursor
//! by its display width; zero-width characters ride on the previous cell as
//! combining marks, or on a blank when they open the line.

use super::screen::Screen;
use crate::layout::{char_width, flow, placed_width};
use crate::types::Style;

/// A block of text anchored at a screen position.
#[derive(Debug, Clone, Copy)]
pub struct TextBlock<'a> {
    text: &'a str,
    x: u16,
    y: u16,
    /// 0 means "up to the right edge".
    max_width: u16,
    style: Style,
}

impl<'a> TextBlock<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            x: 0,
            y: 0,
            max_width: 0,
            style: Style::DEFAULT,
        }
    }

    pub fn with_offset(mut self, x: u16, y: u16) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_max_width(mut self, max_width: u16) -> Self {
        self.max_width = max_width;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Flow the text to the available width and place it.
    ///
    /// Returns the right edge reached (exclusive) and the row of the last
    /// line.
    pub fn draw<S: Screen + ?Sized>(&self, screen: &mut S) -> (u16, u16) {
        let (columns, _) = screen.size();
        let mut width = columns.saturating_sub(self.x);
        if self.max_width > 0 && width > self.max_width {
            width = self.max_width;
        }

        let mut right = 0;
        let mut y = self.y;
        for (i, line) in flow(self.text, width as usize).iter().enumerate() {
            y = self.y.saturating_add(i as u16);
            right = right.max(draw_line(screen, line, self.x, y, self.style));
        }
        (right, y)
    }
}

/// Place one line at (`x`, `y`). Returns the right edge reached, or 0 for a
/// line with nothing drawn.
///
/// Advances by [`placed_width`], so the right edge is `x` plus the line's
/// [`line_width`](crate::layout::line_width).
pub fn draw_line<S: Screen + ?Sized>(screen: &mut S, line: &str, x: u16, y: u16, style: Style) -> u16 {
    let mut x = x;
    let mut right = 0;
    // Last placed cell, held back so trailing marks can join it.
    let mut pending: Option<(u16, char, Vec<char>)> = None;

    for c in line.chars() {
        if c.is_control() {
            continue;
        }

        let w = placed_width(c, pending.is_some());
        if w == 0 {
            if let Some((_, _, marks)) = pending.as_mut() {
                marks.push(c);
            }
            continue;
        }

        if let Some((px, base, marks)) = pending.take() {
            screen.set_content(px, y, base, &marks, style);
        }
        pending = Some(if char_width(c) == 0 {
            (x, ' ', vec![c])
        } else {
            (x, c, Vec::new())
        });
        x = x.saturating_add(w as u16);
        right = right.max(x);
    }

    if let Some((px, base, marks)) = pending {
        screen.set_content(px, y, base, &marks, style);
    }
    right
}
