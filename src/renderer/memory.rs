//! In-memory screen for tests and headless runs.
//!
//! Draws into a [`FrameBuffer`] and reads input from a channel that an
//! [`EventFeed`] writes to, so a whole picker session can be scripted.

use std::sync::mpsc::{self, Receiver, Sender};

use super::buffer::FrameBuffer;
use super::screen::{Polled, Screen};
use crate::error::Result;
use crate::input::events::{InputEvent, Key};
use crate::pipeline::wake::{Notifier, ScreenMessage};
use crate::types::Style;

pub struct MemoryScreen {
    buffer: FrameBuffer,
    tx: Sender<ScreenMessage>,
    rx: Receiver<ScreenMessage>,
    /// Size announced by the last resize event, applied on `sync`.
    pending_size: Option<(u16, u16)>,
    shows: usize,
    syncs: usize,
}

impl MemoryScreen {
    pub fn new(width: u16, height: u16) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            buffer: FrameBuffer::new(width, height),
            tx,
            rx,
            pending_size: None,
            shows: 0,
            syncs: 0,
        }
    }

    /// Writer side of this screen's input channel.
    pub fn feed(&self) -> EventFeed {
        EventFeed {
            tx: self.tx.clone(),
        }
    }

    pub fn buffer(&self) -> &FrameBuffer {
        &self.buffer
    }

    pub fn row_text(&self, y: u16) -> String {
        self.buffer.row_text(y)
    }

    /// Number of `show` calls so far.
    pub fn show_count(&self) -> usize {
        self.shows
    }

    /// Number of `sync` calls so far.
    pub fn sync_count(&self) -> usize {
        self.syncs
    }
}

impl Screen for MemoryScreen {
    fn clear(&mut self) {
        self.buffer.clear();
    }

    fn set_content(&mut self, x: u16, y: u16, ch: char, combining: &[char], style: Style) {
        self.buffer.set(x, y, ch, combining, style);
    }

    fn size(&self) -> (u16, u16) {
        (self.buffer.width(), self.buffer.height())
    }

    fn show(&mut self) -> Result<()> {
        self.shows += 1;
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        if let Some((width, height)) = self.pending_size.take() {
            self.buffer.resize(width, height);
        }
        self.syncs += 1;
        Ok(())
    }

    fn poll_event(&mut self) -> Result<Polled> {
        let polled = match self.rx.recv() {
            Ok(ScreenMessage::Input(event)) => {
                if let InputEvent::Resize(width, height) = event {
                    self.pending_size = Some((width, height));
                }
                Polled::Input(event)
            }
            Ok(ScreenMessage::Wake) => Polled::Wake,
            Ok(ScreenMessage::Closed) | Err(_) => Polled::Closed,
        };
        Ok(polled)
    }

    fn notifier(&self) -> Notifier {
        Notifier::new(self.tx.clone())
    }
}

/// Scripted input for a [`MemoryScreen`].
#[derive(Debug, Clone)]
pub struct EventFeed {
    tx: Sender<ScreenMessage>,
}

impl EventFeed {
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(ScreenMessage::Input(event)).is_ok()
    }

    pub fn key(&self, key: Key) -> bool {
        self.send(InputEvent::Key(key))
    }

    /// Send each character of `text` as a key press.
    pub fn type_str(&self, text: &str) -> bool {
        text.chars().all(|c| self.key(Key::Char(c)))
    }

    pub fn resize(&self, width: u16, height: u16) -> bool {
        self.send(InputEvent::Resize(width, height))
    }

    /// End the input stream.
    pub fn close(&self) -> bool {
        self.tx.send(ScreenMessage::Closed).is_ok()
    }
}
