//! Core width calculation for terminal text.
//!
//! Measures the display width of characters and strings in terminal cells.
//! Uses Unicode East Asian Width for character widths. The flow engine and
//! the glyph renderer both measure through [`char_width`], so a wrapped line
//! always occupies exactly the columns the renderer advances over.

use unicode_width::UnicodeWidthChar;

/// Display width of a single Unicode codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms, emoji)
#[inline]
pub fn char_width(c: char) -> usize {
    // Force known emoji ranges to width 2 (terminal renderers usually treat them as wide)
    if c.is_control() {
        return 0;
    }
    match c as u32 {
        // Sparkles ✨, Zap ⚡, etc
        0x2600..=0x27BF => 2,
        // Misc Symbols and Pictographs
        0x1F300..=0x1F5FF => 2,
        // Emoticons (😀)
        0x1F600..=0x1F64F => 2,
        // Transport and Map Symbols (🚀)
        0x1F680..=0x1F6FF => 2,
        // Supplemental Symbols and Pictographs
        0x1F900..=0x1F9FF => 2,
        // Symbols and Pictographs Extended-A
        0x1FA70..=0x1FAFF => 2,
        _ => c.width().unwrap_or(0),
    }
}

/// Columns `c` takes when placed on a line.
///
/// `has_base` tells whether a cell is already placed on the line. A
/// zero-width mark with nothing to attach to is drawn on a blank of its own.
#[inline]
pub fn placed_width(c: char, has_base: bool) -> usize {
    match char_width(c) {
        0 if !has_base && !c.is_control() => 1,
        w => w,
    }
}

/// Columns a line occupies once drawn, measured with [`placed_width`].
pub fn line_width(s: &str) -> usize {
    let mut width = 0;
    for c in s.chars() {
        width += placed_width(c, width > 0);
    }
    width
}

/// Display width of a string in terminal cells.
///
/// Fast path for printable ASCII; otherwise the sum of [`char_width`].
pub fn string_width(s: &str) -> usize {
    if s.is_ascii() {
        return s.bytes().filter(|&b| (0x20..0x7F).contains(&b)).count();
    }
    s.chars().map(char_width).sum()
}
