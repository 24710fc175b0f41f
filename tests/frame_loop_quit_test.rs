use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};

use tui_wireframe::engine::{FrameLoop, LoopConfig, LoopPhase};
use tui_wireframe::input::{spawn_input_thread, InputError, KeySource};
use tui_wireframe::term::{DisplayError, DisplaySink, FrameBuffer};
use tui_wireframe::types::CameraAction;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Directive {
    Frame(String),
    ShowCursor,
}

#[derive(Clone, Default)]
struct RecordingSink {
    log: Arc<Mutex<Vec<Directive>>>,
}

impl DisplaySink for RecordingSink {
    fn present(&mut self, fb: &FrameBuffer) -> Result<(), DisplayError> {
        self.log.lock().unwrap().push(Directive::Frame(fb.to_text()));
        Ok(())
    }

    fn restore(&mut self) -> Result<(), DisplayError> {
        self.log.lock().unwrap().push(Directive::ShowCursor);
        Ok(())
    }
}

/// Delivers keys with a fixed gap between them, then idles.
struct TimedKeys {
    keys: VecDeque<KeyCode>,
    gap: Duration,
}

impl KeySource for TimedKeys {
    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>, InputError> {
        thread::sleep(self.gap.min(timeout));
        Ok(self.keys.pop_front().map(KeyEvent::from))
    }
}

fn config() -> LoopConfig {
    LoopConfig {
        width: 40,
        height: 12,
        target_fps: 200,
        ..LoopConfig::default()
    }
}

#[test]
fn quit_key_stops_loop_and_shows_cursor_last() {
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();
    let keys = TimedKeys {
        keys: VecDeque::from([KeyCode::Char('w'), KeyCode::Char('e'), KeyCode::Char('x')]),
        gap: Duration::from_millis(10),
    };
    let poll = config().poll_interval;
    let input = spawn_input_thread(keys, tx, running.clone(), poll).unwrap();

    let sink = RecordingSink::default();
    let log = sink.log.clone();
    let mut fl = FrameLoop::new(&config(), sink, rx, running.clone());

    let started = Instant::now();
    fl.run().unwrap();
    input.join().unwrap().unwrap();

    assert!(started.elapsed() < Duration::from_secs(5));
    assert_eq!(fl.phase(), LoopPhase::Stopping);
    assert!(!running.load(Ordering::Acquire));

    let log = log.lock().unwrap();
    assert_eq!(log.last(), Some(&Directive::ShowCursor));
    assert_eq!(
        log.iter().filter(|d| **d == Directive::ShowCursor).count(),
        1
    );
    assert!(log.iter().any(|d| matches!(d, Directive::Frame(_))));
}

#[test]
fn input_thread_exits_within_a_poll_of_loop_stopping() {
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();
    let keys = TimedKeys {
        keys: VecDeque::new(),
        gap: Duration::from_millis(10),
    };
    let input = spawn_input_thread(keys, tx, running.clone(), Duration::from_millis(10)).unwrap();

    let stopper = {
        let running = running.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(50));
            running.store(false, Ordering::Release);
        })
    };

    let mut fl = FrameLoop::new(&config(), RecordingSink::default(), rx, running.clone());
    fl.run().unwrap();
    stopper.join().unwrap();

    let stopped = Instant::now();
    input.join().unwrap().unwrap();
    assert!(stopped.elapsed() < Duration::from_millis(500));
}

#[test]
fn overlay_reflects_keys_from_input_thread() {
    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();
    let keys = TimedKeys {
        keys: VecDeque::from([KeyCode::Char('p'), KeyCode::Char('x')]),
        gap: Duration::from_millis(5),
    };
    let input = spawn_input_thread(keys, tx, running.clone(), Duration::from_millis(10)).unwrap();

    let sink = RecordingSink::default();
    let log = sink.log.clone();
    let mut fl = FrameLoop::new(&config(), sink, rx, running);
    fl.run().unwrap();
    input.join().unwrap().unwrap();

    assert!(fl.scene().is_paused());
    let log = log.lock().unwrap();
    let last_frame = log
        .iter()
        .rev()
        .find_map(|d| match d {
            Directive::Frame(text) => Some(text.clone()),
            Directive::ShowCursor => None,
        })
        .unwrap();
    // 40 columns clip the overlay before the pause marker; the status row starts with Pos.
    assert!(last_frame.starts_with("Pos: ("));
}

#[test]
fn quit_during_frame_delay_returns_within_a_poll() {
    // 10 fps: a 100 ms delay that a quit must cut short.
    let config = LoopConfig {
        target_fps: 10,
        ..config()
    };
    let (tx, rx) = mpsc::channel();
    let quitter = thread::spawn(move || {
        thread::sleep(Duration::from_millis(150));
        let sent = Instant::now();
        tx.send(CameraAction::Quit).unwrap();
        sent
    });

    let mut fl = FrameLoop::new(
        &config,
        RecordingSink::default(),
        rx,
        Arc::new(AtomicBool::new(true)),
    );
    let summary = fl.run().unwrap();
    let sent = quitter.join().unwrap();

    assert!(sent.elapsed() < config.poll_interval + Duration::from_millis(15));
    assert!(summary.frames >= 1);
    assert_eq!(fl.phase(), LoopPhase::Stopping);
}
