//! Focus loop - the controller that drives one picker session.
//!
//! ```text
//! Screen::poll_event ──► route
//!    │                    ├─ Tab/Down, BackTab/Up ──► Selection
//!    │                    ├─ Enter / Escape / quit ──► terminate
//!    │                    ├─ other char ──► Debouncer ──► Choice + Wake
//!    │                    └─ Resize ──► Screen::sync
//!    │
//!    ├─ Wake ──► drain Choices ──► Selection::set_active
//!    └─ after each handled event: Selection::render + Screen::show
//! ```
//!
//! The loop blocks in `poll_event` only. The debouncer is stopped before
//! `run` returns, whatever the exit path.

use std::sync::mpsc::{Receiver, TryRecvError};

use tracing::{debug, info, trace};

use crate::config::PickerConfig;
use crate::error::Result;
use crate::input::debounce::{Choice, Debouncer};
use crate::input::events::{InputEvent, Key};
use crate::renderer::screen::{Polled, Screen};
use crate::state::selection::Selection;

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    Confirmed,
    Cancelled,
}

/// Result of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: SessionState,
    /// Confirmed option index; `None` when cancelled.
    pub index: Option<usize>,
    /// Confirmed option text, or the cancel sentinel.
    pub value: String,
}

impl Outcome {
    pub fn is_confirmed(&self) -> bool {
        self.state == SessionState::Confirmed
    }
}

pub struct FocusLoop<S: Screen> {
    screen: S,
    selection: Selection,
    config: PickerConfig,
    state: SessionState,
    matcher: Option<Debouncer>,
}

impl<S: Screen> FocusLoop<S> {
    pub fn new(screen: S, options: Vec<String>, config: PickerConfig) -> Result<Self> {
        let selection = Selection::new(options, config.cancel_labels.as_slice())?;
        Ok(Self {
            screen,
            selection,
            config,
            state: SessionState::Browsing,
            matcher: None,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Give back the screen, e.g. to restore the terminal.
    pub fn into_screen(self) -> S {
        self.screen
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the index matcher thread is alive.
    pub fn matcher_running(&self) -> bool {
        self.matcher.as_ref().is_some_and(Debouncer::is_running)
    }

    /// Run the session until the user confirms or cancels.
    pub fn run(&mut self) -> Result<Outcome> {
        let (matcher, choices) = Debouncer::spawn(
            self.selection.key_space(),
            self.config.debounce,
            Some(self.screen.notifier()),
        )?;
        self.matcher = Some(matcher);
        self.state = SessionState::Browsing;
        info!(options = self.selection.len(), "picker session started");

        let result = self.event_loop(&choices);

        if let Some(matcher) = self.matcher.as_mut() {
            matcher.cancel();
        }
        let outcome = result?;
        info!(state = ?outcome.state, index = ?outcome.index, "picker session finished");
        Ok(outcome)
    }

    fn event_loop(&mut self, choices: &Receiver<Choice>) -> Result<Outcome> {
        self.redraw()?;

        while self.state == SessionState::Browsing {
            match self.screen.poll_event()? {
                Polled::Input(InputEvent::Key(key)) => self.handle_key(key),
                Polled::Input(InputEvent::Resize(width, height)) => {
                    debug!(width, height, "resize");
                    self.screen.sync()?;
                }
                Polled::Wake => self.drain_choices(choices),
                Polled::Closed => {
                    debug!("input closed");
                    self.state = SessionState::Cancelled;
                }
            }

            if self.state == SessionState::Browsing {
                self.redraw()?;
            }
        }

        Ok(self.outcome())
    }

    fn handle_key(&mut self, key: Key) {
        trace!(?key, "key");
        match key {
            Key::BackTab | Key::Up => self.selection.move_up(),
            Key::Tab | Key::Down => self.selection.move_down(),
            Key::Escape => self.state = SessionState::Cancelled,
            Key::Char(c) if c == self.config.quit_char => self.state = SessionState::Cancelled,
            Key::Enter => self.state = SessionState::Confirmed,
            Key::Char(c) => {
                if let Some(matcher) = &self.matcher {
                    matcher.push(c);
                }
            }
        }
    }

    fn drain_choices(&mut self, choices: &Receiver<Choice>) {
        loop {
            match choices.try_recv() {
                Ok(choice) => {
                    debug!(index = choice.index, "applying typed choice");
                    self.selection.set_active(choice.index);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
    }

    fn redraw(&mut self) -> Result<()> {
        self.selection.render(&mut self.screen, &self.config.theme);
        self.screen.show()
    }

    fn outcome(&self) -> Outcome {
        match self.state {
            SessionState::Confirmed => Outcome {
                state: SessionState::Confirmed,
                index: Some(self.selection.active_index()),
                value: self.selection.active_value().to_string(),
            },
            state => Outcome {
                state,
                index: None,
                value: self.config.cancel_sentinel.clone(),
            },
        }
    }
}
