//! The frame loop: `Starting → Running → Stopping`.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::config::LoopConfig;
use crate::core::{ActionOutcome, SceneState};
use crate::term::{DisplayError, DisplaySink, FrameBuffer, SceneView};
use crate::types::CameraAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Starting,
    Running,
    Stopping,
}

/// What a finished run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSummary {
    pub frames: u64,
}

impl fmt::Display for LoopSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Renderer stopped after {} frames.", self.frames)
    }
}

/// Owns the scene and the grid; drives a [`DisplaySink`].
///
/// Camera actions arrive on `actions`. They are applied at the start of each
/// frame and while waiting out the frame delay, so a quit ends the wait at
/// once. The loop runs while `running` is set; anyone holding the flag (the
/// input thread, a quit action, a test) stops it within one poll interval.
pub struct FrameLoop<S: DisplaySink> {
    scene: SceneState,
    view: SceneView,
    fb: FrameBuffer,
    sink: S,
    actions: Receiver<CameraAction>,
    running: Arc<AtomicBool>,
    frame_delay: Duration,
    poll_interval: Duration,
    phase: LoopPhase,
}

impl<S: DisplaySink> FrameLoop<S> {
    pub fn new(
        config: &LoopConfig,
        sink: S,
        actions: Receiver<CameraAction>,
        running: Arc<AtomicBool>,
    ) -> Self {
        let fb = FrameBuffer::new(config.width, config.height);
        Self {
            scene: SceneState::new(),
            view: SceneView::for_buffer(&fb),
            fb,
            sink,
            actions,
            running,
            frame_delay: config.frame_delay(),
            poll_interval: config.poll_interval.max(Duration::from_millis(1)),
            phase: LoopPhase::Starting,
        }
    }

    pub fn with_scene(mut self, scene: SceneState) -> Self {
        self.scene = scene;
        self
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn scene(&self) -> &SceneState {
        &self.scene
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Render and present one frame without sleeping.
    pub fn step(&mut self) -> Result<(), DisplayError> {
        self.drain_actions();
        self.scene.advance();
        self.view.render_into(&self.scene, &mut self.fb);
        self.sink.present(&self.fb)
    }

    /// Run until the `running` flag is cleared, then restore the display.
    ///
    /// The sink is restored on every exit path, including a failed frame.
    pub fn run(&mut self) -> Result<LoopSummary> {
        self.phase = LoopPhase::Running;
        tracing::info!(
            width = self.fb.width(),
            height = self.fb.height(),
            frame_delay = ?self.frame_delay,
            "frame loop running"
        );

        let result = self.run_frames();

        self.phase = LoopPhase::Stopping;
        self.running.store(false, Ordering::Release);
        tracing::info!(frames = self.scene.frame_count(), "frame loop stopping");

        let restored = self.sink.restore();
        if let Err(e) = &restored {
            tracing::warn!("failed to restore display: {e}");
        }
        result?;
        restored.context("restoring display")?;
        Ok(LoopSummary {
            frames: self.scene.frame_count(),
        })
    }

    fn run_frames(&mut self) -> Result<()> {
        while self.is_running() {
            self.step().context("presenting frame")?;
            self.wait_for_next_frame();
        }
        Ok(())
    }

    /// Sleep out the fixed frame delay, applying actions as they arrive.
    ///
    /// Returns early once `running` is cleared. Render time is not
    /// subtracted from the delay.
    fn wait_for_next_frame(&mut self) {
        let deadline = Instant::now() + self.frame_delay;
        while self.is_running() {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return;
            }
            let slice = remaining.min(self.poll_interval);
            match self.actions.recv_timeout(slice) {
                Ok(action) => self.apply_action(action),
                Err(RecvTimeoutError::Timeout) => {}
                // No sender left: keep the cadence, still checking the flag.
                Err(RecvTimeoutError::Disconnected) => thread::sleep(slice),
            }
        }
    }

    fn drain_actions(&mut self) {
        while let Ok(action) = self.actions.try_recv() {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: CameraAction) {
        if self.scene.apply(action) == ActionOutcome::Quit {
            tracing::info!("quit requested");
            self.running.store(false, Ordering::Release);
        }
    }
}
