//! Core rendering types.
//!
//! Colors, text attributes and the style a cell is drawn with. These are
//! plain values: the theme is built once and passed by reference into
//! rendering calls.

// =============================================================================
// Rgba - Color representation for rendering
// =============================================================================

/// RGBA color for rendering.
///
/// Special markers:
/// - r=-1: Terminal default
/// - r=-2: ANSI palette, index in g
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    /// Create an ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    // Palette entries used by the default theme.
    pub const BLACK: Self = Self::ansi(0);
    pub const GRAY: Self = Self::ansi(8);
    pub const WHITE: Self = Self::ansi(15);

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// Palette index for ANSI colors.
    #[inline]
    pub const fn ansi_index(&self) -> Option<u8> {
        if self.is_ansi() {
            Some(self.g as u8)
        } else {
            None
        }
    }
}

// =============================================================================
// Cell Attributes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Text attributes as a bitfield.
    ///
    /// Combine with bitwise OR: `Attr::BOLD | Attr::UNDERLINE`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE = 0;
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const INVERSE = 1 << 4;
    }
}

// =============================================================================
// Style
// =============================================================================

/// Foreground, background and attributes for a drawn cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
    pub attrs: Attr,
}

impl Style {
    /// White on black, the picker's base look.
    pub const DEFAULT: Self = Self {
        fg: Rgba::WHITE,
        bg: Rgba::BLACK,
        attrs: Attr::NONE,
    };

    pub const fn foreground(self, fg: Rgba) -> Self {
        Self { fg, ..self }
    }

    pub const fn background(self, bg: Rgba) -> Self {
        Self { bg, ..self }
    }

    pub const fn attrs(self, attrs: Attr) -> Self {
        Self { attrs, ..self }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The two styles the picker draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub normal: Style,
    pub highlight: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            normal: Style::DEFAULT,
            highlight: Style::DEFAULT.background(Rgba::GRAY),
        }
    }
}
