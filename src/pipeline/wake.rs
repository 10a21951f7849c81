//! Wake notification for a blocked screen poll.
//!
//! Every screen funnels its input into one channel of [`ScreenMessage`]s and
//! blocks on it in `poll_event`. Work that finishes off the loop's cadence
//! (a debounced choice) posts [`ScreenMessage::Wake`] through a
//! [`Notifier`] so the loop unblocks and redraws right away:
//!
//! 1. Focus loop blocks in `Screen::poll_event` (channel `recv`)
//! 2. Debouncer emits a choice, then calls `Notifier::notify`
//! 3. `Wake` arrives on the same channel, the loop drains choices and redraws

use std::sync::mpsc::Sender;

use crate::input::events::InputEvent;

/// Messages carried on a screen's event channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenMessage {
    Input(InputEvent),
    /// Interrupt a blocked poll without an input event.
    Wake,
    /// The event source is gone.
    Closed,
}

/// Handle that wakes a screen's blocked poll.
///
/// Cheap to clone and safe to move to another thread.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Sender<ScreenMessage>,
}

impl Notifier {
    pub fn new(tx: Sender<ScreenMessage>) -> Self {
        Self { tx }
    }

    /// Post a wake. Returns false once the screen has gone away.
    pub fn notify(&self) -> bool {
        self.tx.send(ScreenMessage::Wake).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_notify_posts_wake() {
        let (tx, rx) = mpsc::channel();
        let notifier = Notifier::new(tx);
        assert!(notifier.clone().notify());
        assert_eq!(rx.try_recv(), Ok(ScreenMessage::Wake));
    }

    #[test]
    fn test_notify_after_receiver_dropped() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        assert!(!Notifier::new(tx).notify());
    }
}
