//! Debounced index matcher.
//!
//! Lets the user jump to an option by typing its index. Keystrokes are
//! resolved against the key space (`"0"`, `"1"`, … `"N-1"`) on a dedicated
//! thread that owns the typed buffer:
//!
//! ```text
//! key ──► buffer += key ──► resolve(buffer)
//!                              │
//!         ┌────────────────────┼──────────────────────┐
//!      no match          exact + prefix            exact only
//!     reset buffer     hold as pending, wait     emit Choice, reset
//!                              │
//!                 quiet for `interval` ──► emit pending, reset
//! ```
//!
//! With 12 options, typing `1` waits because `10` and `11` are still
//! reachable; typing `2` selects immediately.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::pipeline::wake::Notifier;

/// A resolved selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub index: usize,
    /// The matched key.
    pub value: String,
}

enum DebounceMessage {
    Key(char),
    Cancel,
}

/// Decimal index strings for `len` options.
pub fn key_space(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}

/// Resolve `buffer` against `keys` in one full scan.
///
/// Returns the index of the exact match (the last one wins if keys repeat)
/// and whether any other key has `buffer` as a prefix.
pub fn resolve(keys: &[String], buffer: &str) -> (Option<usize>, bool) {
    let mut index = None;
    let mut matches_prefix = false;
    for (i, key) in keys.iter().enumerate() {
        if key == buffer {
            index = Some(i);
            continue;
        }
        if key.starts_with(buffer) {
            matches_prefix = true;
        }
    }
    (index, matches_prefix)
}

/// Handle to a running matcher thread.
///
/// Dropping the handle cancels the thread.
pub struct Debouncer {
    tx: Sender<DebounceMessage>,
    cancelled: Arc<AtomicBool>,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    /// Spawn the matcher thread.
    ///
    /// - `keys`: the key space to resolve against
    /// - `interval`: quiet period before a pending match is committed
    /// - `notifier`: woken after every emitted [`Choice`]
    ///
    /// Returns the handle and the receiving end of the choice channel.
    pub fn spawn(
        keys: Vec<String>,
        interval: Duration,
        notifier: Option<Notifier>,
    ) -> Result<(Self, Receiver<Choice>)> {
        let (tx, rx) = mpsc::channel();
        let (choice_tx, choice_rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let running = Arc::new(AtomicBool::new(true));

        let matcher = Matcher {
            keys,
            interval,
            buffer: String::new(),
            pending: None,
            choices: choice_tx,
            notifier,
            cancelled: cancelled.clone(),
        };
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("urlpick-debounce".to_string())
            .spawn(move || {
                matcher.run(rx);
                running_clone.store(false, Ordering::SeqCst);
            })
            .map_err(|source| {
                running.store(false, Ordering::SeqCst);
                Error::Spawn {
                    name: "debounce",
                    source,
                }
            })?;

        Ok((
            Self {
                tx,
                cancelled,
                running,
                handle: Some(handle),
            },
            choice_rx,
        ))
    }

    /// Queue a keystroke. Returns false once the matcher has stopped.
    pub fn push(&self, c: char) -> bool {
        self.tx.send(DebounceMessage::Key(c)).is_ok()
    }

    /// Stop the matcher and wait for its thread to exit.
    ///
    /// Keystrokes still queued are discarded; nothing is emitted afterwards.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        let _ = self.tx.send(DebounceMessage::Cancel);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
            debug!("debouncer stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// State owned by the matcher thread.
struct Matcher {
    keys: Vec<String>,
    interval: Duration,
    buffer: String,
    pending: Option<usize>,
    choices: Sender<Choice>,
    notifier: Option<Notifier>,
    cancelled: Arc<AtomicBool>,
}

impl Matcher {
    fn run(mut self, rx: Receiver<DebounceMessage>) {
        loop {
            if self.cancelled.load(Ordering::SeqCst) {
                break;
            }
            let keep_going = match rx.recv_timeout(self.interval) {
                Ok(DebounceMessage::Key(c)) => {
                    if self.cancelled.load(Ordering::SeqCst) {
                        break;
                    }
                    self.on_key(c)
                }
                Err(RecvTimeoutError::Timeout) => self.on_idle(),
                Ok(DebounceMessage::Cancel) | Err(RecvTimeoutError::Disconnected) => false,
            };
            if !keep_going {
                break;
            }
        }
    }

    fn on_key(&mut self, c: char) -> bool {
        self.buffer.push(c);
        let (index, matches_prefix) = resolve(&self.keys, &self.buffer);
        trace!(buffer = %self.buffer, ?index, matches_prefix, "resolved keystroke");

        match (index, matches_prefix) {
            (None, false) => {
                self.buffer.clear();
                self.pending = None;
                true
            }
            (None, true) => {
                self.pending = None;
                true
            }
            // Wait to see if more is typed.
            (Some(index), true) => {
                self.pending = Some(index);
                true
            }
            (Some(index), false) => {
                self.pending = None;
                self.buffer.clear();
                self.emit(index)
            }
        }
    }

    fn on_idle(&mut self) -> bool {
        self.buffer.clear();
        match self.pending.take() {
            Some(index) => self.emit(index),
            None => true,
        }
    }

    /// Send a choice and wake the focus loop. False once nobody listens.
    fn emit(&mut self, index: usize) -> bool {
        let choice = Choice {
            index,
            value: self.keys[index].clone(),
        };
        debug!(index, "debounced choice");
        if self.choices.send(choice).is_err() {
            return false;
        }
        if let Some(notifier) = &self.notifier {
            notifier.notify();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    fn keys(len: usize) -> Vec<String> {
        key_space(len)
    }

    // ── resolve ──

    #[test]
    fn test_key_space() {
        assert_eq!(key_space(3), vec!["0", "1", "2"]);
        assert!(key_space(0).is_empty());
    }

    #[test]
    fn test_resolve_exact_only() {
        assert_eq!(resolve(&keys(3), "2"), (Some(2), false));
    }

    #[test]
    fn test_resolve_exact_and_prefix() {
        assert_eq!(resolve(&keys(12), "1"), (Some(1), true));
        assert_eq!(resolve(&keys(12), "11"), (Some(11), false));
    }

    #[test]
    fn test_resolve_no_match() {
        assert_eq!(resolve(&keys(3), "9"), (None, false));
        assert_eq!(resolve(&keys(12), "19"), (None, false));
    }

    #[test]
    fn test_resolve_last_exact_match_wins() {
        let keys: Vec<String> = ["a", "ab", "a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(resolve(&keys, "a"), (Some(2), true));
    }

    #[test]
    fn test_resolve_prefix_without_exact() {
        let keys: Vec<String> = ["ab", "ac"].iter().map(|s| s.to_string()).collect();
        assert_eq!(resolve(&keys, "a"), (None, true));
    }

    // ── matcher thread ──

    #[test]
    fn test_unambiguous_key_emits_immediately() {
        let (debouncer, choices) = Debouncer::spawn(keys(3), INTERVAL, None).unwrap();
        debouncer.push('2');
        let choice = choices.recv_timeout(INTERVAL / 2).unwrap();
        assert_eq!(choice, Choice { index: 2, value: "2".to_string() });
    }

    #[test]
    fn test_ambiguous_key_waits_for_quiet_period() {
        let (debouncer, choices) = Debouncer::spawn(keys(12), INTERVAL, None).unwrap();
        debouncer.push('1');
        assert!(choices.recv_timeout(INTERVAL / 2).is_err());
        let choice = choices.recv_timeout(INTERVAL * 4).unwrap();
        assert_eq!(choice.index, 1);
    }

    #[test]
    fn test_second_digit_resolves_ambiguity() {
        let (debouncer, choices) = Debouncer::spawn(keys(12), INTERVAL, None).unwrap();
        debouncer.push('1');
        debouncer.push('1');
        let choice = choices.recv_timeout(INTERVAL / 2).unwrap();
        assert_eq!(choice.index, 11);
    }

    #[test]
    fn test_invalid_key_resets_buffer() {
        let (debouncer, choices) = Debouncer::spawn(keys(3), INTERVAL, None).unwrap();
        debouncer.push('9');
        debouncer.push('1');
        let choice = choices.recv_timeout(INTERVAL / 2).unwrap();
        assert_eq!(choice.index, 1);
        assert!(choices.recv_timeout(INTERVAL * 2).is_err());
    }

    #[test]
    fn test_invalid_continuation_drops_pending() {
        let (debouncer, choices) = Debouncer::spawn(keys(12), INTERVAL, None).unwrap();
        debouncer.push('1');
        debouncer.push('9');
        assert!(choices.recv_timeout(INTERVAL * 3).is_err());
    }

    #[test]
    fn test_choice_wakes_notifier() {
        let (tx, rx) = mpsc::channel();
        let (debouncer, choices) =
            Debouncer::spawn(keys(3), INTERVAL, Some(Notifier::new(tx))).unwrap();
        debouncer.push('0');
        assert_eq!(choices.recv_timeout(INTERVAL).unwrap().index, 0);
        assert_eq!(
            rx.recv_timeout(INTERVAL).unwrap(),
            crate::pipeline::wake::ScreenMessage::Wake
        );
    }

    #[test]
    fn test_cancel_stops_thread_and_closes_channel() {
        let (mut debouncer, choices) = Debouncer::spawn(keys(12), INTERVAL, None).unwrap();
        assert!(debouncer.is_running());
        debouncer.push('1');
        debouncer.cancel();
        assert!(!debouncer.is_running());
        assert!(!debouncer.push('2'));
        assert_eq!(choices.recv_timeout(INTERVAL * 3), Err(RecvTimeoutError::Disconnected));
    }
}
