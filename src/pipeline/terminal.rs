//! Terminal screen backed by crossterm.
//!
//! Enters raw mode and the alternate screen on creation, and restores both
//! when dropped. Drawing goes to a back [`FrameBuffer`]; `show` diffs it
//! against what the terminal already displays. Output is written to stderr
//! so stdout stays free for the picked value.

use std::io::{self, BufWriter, Stderr};
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::style::ResetColor;
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use tracing::{debug, warn};

use super::wake::{Notifier, ScreenMessage};
use crate::error::{Error, Result};
use crate::input::reader::InputReader;
use crate::renderer::buffer::FrameBuffer;
use crate::renderer::diff::DiffRenderer;
use crate::renderer::screen::{Polled, Screen};
use crate::types::Style;

pub struct TerminalScreen {
    out: BufWriter<Stderr>,
    back: FrameBuffer,
    renderer: DiffRenderer,
    tx: Sender<ScreenMessage>,
    rx: Receiver<ScreenMessage>,
    reader: Option<InputReader>,
    /// Raw mode is on and the terminal needs restoring.
    active: bool,
}

impl TerminalScreen {
    /// Take over the terminal and start reading input.
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        enable_raw_mode()?;

        let (tx, rx) = mpsc::channel();
        let mut screen = Self {
            out: BufWriter::new(io::stderr()),
            back: FrameBuffer::new(width, height),
            renderer: DiffRenderer::new(),
            tx,
            rx,
            reader: None,
            active: true,
        };

        // From here on, Drop restores the terminal if anything fails.
        execute!(screen.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        let reader = InputReader::spawn(screen.tx.clone())
            .map_err(|source| Error::Spawn { name: "input", source })?;
        screen.reader = Some(reader);

        debug!(width, height, "terminal screen ready");
        Ok(screen)
    }

    /// Stop reading input and give the terminal back.
    pub fn restore(&mut self) -> Result<()> {
        if let Some(mut reader) = self.reader.take() {
            reader.stop();
        }
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) {
        self.back.clear();
    }

    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) {
        self.back.set(x, y, ch, combining, style);
    }

    fn size(&self) -> (u16, u16) {
        (self.back.width(), self.back.height())
    }

    fn show(&mut self) -> Result<()> {
        self.renderer.render(&mut self.out, &self.back)?;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            self.back.resize(width, height);
        }
        self.renderer.invalidate();
        execute!(self.out, Clear(ClearType::All))?;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Polled> {
        let polled = match self.rx.recv() {
            Ok(ScreenMessage::Input(event)) => Polled::Input(event),
            Ok(ScreenMessage::Wake) => Polled::Wake,
            Ok(ScreenMessage::Closed) | Err(_) => Polled::Closed,
        };
        Ok(polled)
    }

    fn notifier(&self) -> Notifier {
        Notifier::new(self.tx.clone())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %err, "failed to restore terminal");
        }
    }
}
