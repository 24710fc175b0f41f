//! Terminal wireframe renderer (default binary).
//!
//! Spawns the keyboard thread, then runs the frame loop on the main thread
//! until the quit key is pressed. The terminal is restored on every exit
//! path, including errors and panics; a clean exit prints a one-line summary.

use std::fs::OpenOptions;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc, Mutex};

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use tui_wireframe::engine::{FrameLoop, LoopConfig};
use tui_wireframe::input::{spawn_input_thread, CrosstermKeys};
use tui_wireframe::term::{force_restore_terminal, TerminalRenderer};

fn main() -> Result<()> {
    let config = LoopConfig::from_env();
    init_logging(&config)?;

    // Fail before touching the terminal if there is no keyboard to read.
    let keys = CrosstermKeys::open().context("cannot start keyboard input")?;

    install_panic_hook();

    let mut term = TerminalRenderer::new();
    term.enter().context("cannot prepare terminal")?;

    let running = Arc::new(AtomicBool::new(true));
    let (tx, rx) = mpsc::channel();
    let input = match spawn_input_thread(keys, tx, running.clone(), config.poll_interval) {
        Ok(handle) => handle,
        Err(e) => {
            let _ = term.exit();
            return Err(e).context("cannot spawn input thread");
        }
    };

    let mut frame_loop = FrameLoop::new(&config, term, rx, running.clone());
    let result = frame_loop.run();

    running.store(false, Ordering::Release);
    let input_result = input
        .join()
        .map_err(|_| anyhow!("input thread panicked"))?;

    let summary = result?;
    input_result.context("keyboard input failed")?;
    // Raw mode is off again, so a plain line lands below the shell prompt.
    println!("{summary}");
    Ok(())
}

fn init_logging(config: &LoopConfig) -> Result<()> {
    // stdout and stderr belong to the display; only log to a file.
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();

    tracing::info!("tui-wireframe starting");
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        force_restore_terminal();
        default_hook(info);
    }));
}
