//! Selection model - the option list and which entry is active.
//!
//! Pure state: no I/O, no threads. The focus loop is the only writer.

use crate::error::{Error, Result};
use crate::input::debounce::key_space;
use crate::renderer::glyph::TextBlock;
use crate::renderer::screen::Screen;
use crate::types::Theme;

/// Column every option row starts at.
const ROW_X: u16 = 1;

#[derive(Debug, Clone)]
pub struct Selection {
    options: Vec<String>,
    active: usize,
    cancel: Option<usize>,
}

impl Selection {
    /// Build a selection over `options`, with the first option active.
    ///
    /// The cancel entry is the first option equal to one of `cancel_labels`.
    pub fn new<S: AsRef<str>>(options: Vec<String>, cancel_labels: &[S]) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::NoOptions);
        }
        let cancel = options
            .iter()
            .position(|option| cancel_labels.iter().any(|label| label.as_ref() == option));
        Ok(Self {
            options,
            active: 0,
            cancel,
        })
    }

    /// Move to the previous option, wrapping to the last.
    pub fn move_up(&mut self) {
        self.active = if self.active == 0 {
            self.options.len() - 1
        } else {
            self.active - 1
        };
    }

    /// Move to the next option, wrapping to the first.
    pub fn move_down(&mut self) {
        self.active = (self.active + 1) % self.options.len();
    }

    /// Make `index` active. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) -> bool {
        if index >= self.options.len() {
            return false;
        }
        self.active = index;
        true
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_value(&self) -> &str {
        &self.options[self.active]
    }

    pub fn cancel_index(&self) -> Option<usize> {
        self.cancel
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index strings a user can type to jump to an option.
    pub fn key_space(&self) -> Vec<String> {
        key_space(self.options.len())
    }

    /// Clear `screen` and draw every option, one block below the other.
    pub fn render<S: Screen + ?Sized>(&self, screen: &mut S, theme: &Theme) {
        screen.clear();
        let (_, rows) = screen.size();

        let mut y: u16 = 0;
        for (i, option) in self.options.iter().enumerate() {
            if y >= rows {
                break;
            }
            let (prefix, style) = if i == self.active {
                ('>', theme.highlight)
            } else {
                (' ', theme.normal)
            };
            let label = format!("{} [{}] {}", prefix, i, option);
            let (_, last) = TextBlock::new(&label)
                .with_offset(ROW_X, y)
                .with_style(style)
                .draw(screen);
            y = last.saturating_add(1);
        }
    }
}
