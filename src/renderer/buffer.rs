//! FrameBuffer - the cell grid a screen draws into.
//!
//! - **Flat storage**: `Vec<Cell>` with row-major indexing.
//! - **Clipping**: writes outside the grid are ignored.
//! - **Wide characters**: the renderer advances past the second column, the
//!   buffer itself stores one cell per column.

use crate::layout::char_width;
use crate::types::Style;

// =============================================================================
// Cell - The atomic unit of terminal rendering
// =============================================================================

/// A single terminal cell: a base character plus any combining marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub combining: Vec<char>,
    pub style: Style,
}

impl Cell {
    pub fn new(ch: char, combining: &[char], style: Style) -> Self {
        Self {
            ch,
            combining: combining.to_vec(),
            style,
        }
    }

    /// Columns the base character covers.
    #[inline]
    pub fn width(&self) -> u16 {
        char_width(self.ch) as u16
    }

    /// Base character followed by its combining marks.
    pub fn symbol(&self) -> String {
        let mut s = String::with_capacity(4 + self.combining.len() * 2);
        s.push(self.ch);
        s.extend(self.combining.iter());
        s
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            combining: Vec::new(),
            style: Style::DEFAULT,
        }
    }
}

// =============================================================================
// FrameBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
///
/// Uses flat storage with row-major indexing: `index = y * width + x`
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// Create a new buffer filled with default cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Clear the entire buffer to default cells.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer (clears content).
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells = vec![Cell::default(); width as usize * height as usize];
    }

    /// Set a single cell. Returns true if the cell was inside the grid.
    pub fn set(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        let cell = &mut self.cells[idx];
        cell.ch = ch;
        cell.combining.clear();
        cell.combining.extend_from_slice(combining);
        cell.style = style;
        true
    }

    /// Text of row `y` with trailing blanks removed (for tests and debugging).
    ///
    /// The column covered by the right half of a wide glyph is skipped.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let mut text = String::new();
        let mut x = 0;
        while x < self.width {
            let cell = &self.cells[self.index(x, y)];
            text.push_str(&cell.symbol());
            x = x.saturating_add(cell.width().max(1));
        }
        text.trim_end().to_string()
    }
}
