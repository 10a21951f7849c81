//! Terminal input reader.
//!
//! Polls crossterm for events in a dedicated thread, converts them and
//! forwards them on the screen channel. The poll uses a short timeout so the
//! thread notices the running flag and can be joined on shutdown.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event;
use tracing::{debug, warn};

use super::events::convert_event;
use crate::pipeline::wake::ScreenMessage;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Dedicated terminal reader thread.
pub struct InputReader {
    handle: Option<JoinHandle<()>>,
    running: Arc<AtomicBool>,
}

impl InputReader {
    /// Spawn the reader thread, sending into `tx`.
    pub fn spawn(tx: Sender<ScreenMessage>) -> io::Result<Self> {
        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = thread::Builder::new()
            .name("urlpick-input".to_string())
            .spawn(move || {
                Self::read_loop(&running_clone, &tx);
                running_clone.store(false, Ordering::SeqCst);
            })?;

        Ok(Self {
            handle: Some(handle),
            running,
        })
    }

    fn read_loop(running: &AtomicBool, tx: &Sender<ScreenMessage>) {
        while running.load(Ordering::SeqCst) {
            let ready = match event::poll(POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(err) => {
                    warn!(error = %err, "terminal poll failed");
                    let _ = tx.send(ScreenMessage::Closed);
                    break;
                }
            };
            if !ready {
                continue;
            }

            match event::read() {
                Ok(raw) => {
                    let Some(event) = convert_event(raw) else {
                        continue;
                    };
                    if tx.send(ScreenMessage::Input(event)).is_err() {
                        break; // Screen dropped
                    }
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    warn!(error = %err, "terminal read failed");
                    let _ = tx.send(ScreenMessage::Closed);
                    break;
                }
            }
        }
        debug!("input reader exiting");
    }

    /// Stop the reader thread and wait for it.
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop();
    }
}
