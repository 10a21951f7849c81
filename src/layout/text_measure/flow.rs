//! Text flow: wrapping a string to a maximum display width.
//!
//! The scan is a single pass over the characters, tracking the current
//! column count and the most recent whitespace since the last line start.
//!
//! - `\r` is dropped, `\n` is a hard line break (the line is kept verbatim)
//! - On overflow the line breaks at the last whitespace, trimming both sides
//! - A word wider than the line is broken at the widest prefix that fits
//! - A single glyph wider than the line gets a line of its own
//! - Columns are counted with [`placed_width`], as the glyph renderer
//!   advances, so a mark opening a line takes a column
//! - The remainder is always emitted, so input ending on a break yields a
//!   trailing empty line

use super::width::{line_width, placed_width};

/// Wrap `text` into lines no wider than `max_width` columns.
///
/// A `max_width` of 0 is treated as 1.
pub fn flow(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    flow_into(text, max_width, |line| lines.push(line));
    lines
}

/// Number of lines [`flow`] produces for `text` at `max_width`.
pub fn flow_height(text: &str, max_width: usize) -> usize {
    let mut count = 0;
    flow_into(text, max_width, |_| count += 1);
    count
}

/// Streaming form of [`flow`]: hands each line to `out` as soon as it is
/// complete.
pub fn flow_into(text: &str, max_width: usize, mut out: impl FnMut(String)) {
    let max_width = max_width.max(1);

    let mut buf = String::new();
    let mut col: usize = 0;
    // Byte offset into `buf` of the latest break point.
    let mut last_space: Option<usize> = None;

    for c in text.chars() {
        match c {
            '\r' => continue,
            '\n' => {
                out(std::mem::take(&mut buf));
                col = 0;
                last_space = None;
                continue;
            }
            _ => {}
        }

        // Whitespace at the very start of a line is not a break point.
        if c.is_whitespace() && !buf.is_empty() {
            last_space = Some(buf.len());
        }
        buf.push(c);
        col += placed_width(c, col > 0);

        while col > max_width {
            let end = match last_space.take() {
                Some(at) => at,
                None => hard_break(&buf, max_width),
            };
            if end == buf.len() {
                // One glyph wider than the line; it overflows alone.
                break;
            }

            out(buf[..end].trim().to_string());
            let rest = buf[end..].trim().to_string();
            col = line_width(&rest);
            buf = rest;
        }
    }

    out(buf);
}

/// Byte offset of the widest prefix of `buf` that fits in `max_width`.
///
/// Always keeps at least the first placed cell, and zero-width characters
/// stay with the glyph before them.
fn hard_break(buf: &str, max_width: usize) -> usize {
    let mut width = 0;
    for (i, c) in buf.char_indices() {
        let w = placed_width(c, width > 0);
        if width > 0 && w > 0 && width + w > max_width {
            return i;
        }
        width += w;
    }
    buf.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::text_measure::width::char_width;
    use proptest::prelude::*;

    #[test]
    fn flow_empty_yields_one_empty_line() {
        assert_eq!(flow("", 10), vec![""]);
    }

    #[test]
    fn flow_fits() {
        assert_eq!(flow("hello", 10), vec!["hello"]);
        assert_eq!(flow("hello", 5), vec!["hello"]);
    }

    #[test]
    fn flow_breaks_at_last_space() {
        assert_eq!(flow("hello world", 8), vec!["hello", "world"]);
        assert_eq!(flow("one two three four", 9), vec!["one two", "three", "four"]);
    }

    #[test]
    fn flow_space_at_overflow_column_is_dropped() {
        assert_eq!(flow("abcde fgh", 5), vec!["abcde", "fgh"]);
    }

    #[test]
    fn flow_long_word_is_hard_broken() {
        assert_eq!(flow("abcdefghij", 5), vec!["abcde", "fghij"]);
        assert_eq!(flow("https://example.com/a/b", 8), vec!["https://", "example.", "com/a/b"]);
    }

    #[test]
    fn flow_newlines_are_verbatim() {
        assert_eq!(flow("a  \n  b", 10), vec!["a  ", "  b"]);
        assert_eq!(flow("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn flow_trailing_newline_gives_empty_line() {
        assert_eq!(flow("abc\n", 10), vec!["abc", ""]);
        assert_eq!(flow("\n", 10), vec!["", ""]);
    }

    #[test]
    fn flow_drops_carriage_returns() {
        assert_eq!(flow("a\r\nb\r", 10), vec!["a", "b"]);
    }

    #[test]
    fn flow_cjk_counts_two_columns() {
        assert_eq!(flow("你好世界", 5), vec!["你好", "世界"]);
        assert_eq!(flow("hi你好", 5), vec!["hi你", "好"]);
    }

    #[test]
    fn flow_wide_glyph_wider_than_line() {
        assert_eq!(flow("你a", 1), vec!["你", "a"]);
        assert_eq!(flow("你", 1), vec!["你"]);
    }

    #[test]
    fn flow_combining_marks_take_no_columns() {
        assert_eq!(flow("e\u{301}e\u{301}e\u{301}", 3), vec!["e\u{301}e\u{301}e\u{301}"]);
        // The mark stays with its base across a hard break.
        assert_eq!(flow("abe\u{301}cd", 3), vec!["abe\u{301}", "cd"]);
    }

    #[test]
    fn flow_leading_mark_takes_a_column() {
        assert_eq!(flow("\u{301}abc", 3), vec!["\u{301}ab", "c"]);
        assert_eq!(flow("x\n\u{301}abc", 3), vec!["x", "\u{301}ab", "c"]);
        assert_eq!(flow("ab \u{301}cd", 3), vec!["ab", "\u{301}cd"]);
        assert_eq!(flow("\u{301}你", 2), vec!["\u{301}", "你"]);
    }

    #[test]
    fn flow_zero_width_is_clamped_to_one() {
        assert_eq!(flow("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn flow_height_matches_flow() {
        assert_eq!(flow_height("", 4), 1);
        assert_eq!(flow_height("abcdef", 4), 2);
        assert_eq!(flow_height("abcdef\nghi", 4), 3);
    }

    fn is_single_glyph(line: &str) -> bool {
        line.chars().filter(|&c| char_width(c) > 0).count() == 1
    }

    proptest! {
        #[test]
        fn flow_lines_fit_width(text in "[a-z 你é\u{301}\u{200b}\t\n]{0,80}", width in 1usize..24) {
            for line in flow(&text, width) {
                prop_assert!(
                    line_width(&line) <= width || is_single_glyph(&line),
                    "line {:?} wider than {}", line, width
                );
            }
        }

        #[test]
        fn flow_is_idempotent(text in "[a-z 你é\u{301}\r\n]{0,80}", width in 1usize..24) {
            let lines = flow(&text, width);
            let reflowed = flow(&lines.join("\n"), width);
            prop_assert_eq!(reflowed, lines);
        }
    }
}
