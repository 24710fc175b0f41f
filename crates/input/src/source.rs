//! Keyboard polling thread.
//!
//! The thread polls a [`KeySource`] with a fixed idle interval, maps each key
//! press to a [`CameraAction`] and sends it to the frame loop. Termination is
//! cooperative: both sides check the shared `running` flag.

#[cfg(unix)]
use std::fs::OpenOptions;
use std::io::{self, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};

use crate::map::map_key;
use crate::types::CameraAction;

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("keyboard input needs an interactive terminal")]
    NotATerminal,
    #[error("keyboard read failed: {0}")]
    Io(#[from] io::Error),
}

/// Anything that yields discrete key events.
pub trait KeySource: Send {
    /// Wait at most `timeout` for a key event. `Ok(None)` means idle.
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError>;
}

/// Key source backed by the crossterm event queue.
///
/// Requires raw mode to be enabled to see individual key presses.
#[derive(Debug)]
pub struct CrosstermKeys {
    _private: (),
}

impl CrosstermKeys {
    /// Fails when there is no terminal to read keys from.
    ///
    /// With the `use-dev-tty` feature crossterm reads stdin when it is a
    /// terminal and the controlling terminal otherwise, so either one will do.
    pub fn open() -> Result<Self, InputError> {
        Self::open_with(terminal_available)
    }

    fn open_with(check: impl FnOnce() -> bool) -> Result<Self, InputError> {
        if !check() {
            return Err(InputError::NotATerminal);
        }
        Ok(Self { _private: () })
    }
}

#[cfg(unix)]
fn terminal_available() -> bool {
    io::stdin().is_terminal()
        || OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .is_ok()
}

#[cfg(not(unix))]
fn terminal_available() -> bool {
    io::stdin().is_terminal()
}

impl KeySource for CrosstermKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }
}

/// Spawn the input thread.
///
/// The thread exits when `running` is cleared, after forwarding the quit
/// action, when the receiver is dropped, or when the key source fails. A
/// failure also clears `running` so the frame loop stops too.
pub fn spawn_input_thread<K>(
    source: K,
    tx: Sender<CameraAction>,
    running: Arc<AtomicBool>,
    poll_interval: Duration,
) -> io::Result<JoinHandle<Result<(), InputError>>>
where
    K: KeySource + 'static,
{
    thread::Builder::new()
        .name("input".to_string())
        .spawn(move || run_input_loop(source, &tx, &running, poll_interval))
}

fn run_input_loop<K: KeySource>(
    mut source: K,
    tx: &Sender<CameraAction>,
    running: &AtomicBool,
    poll_interval: Duration,
) -> Result<(), InputError> {
    tracing::debug!(?poll_interval, "input thread started");

    let result = loop {
        if !running.load(Ordering::Acquire) {
            break Ok(());
        }

        let key = match source.poll_key(poll_interval) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(e) => {
                running.store(false, Ordering::Release);
                break Err(e);
            }
        };

        let Some(action) = map_key(key) else {
            continue;
        };
        if tx.send(action).is_err() {
            break Ok(());
        }
        if action == CameraAction::Quit {
            // The frame loop clears `running` once it has applied everything before this.
            tracing::info!("quit key pressed");
            break Ok(());
        }
    };

    tracing::debug!("input thread stopped");
    result
}
