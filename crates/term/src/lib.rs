//! Terminal rendering module.
//!
//! A small, frame-oriented rendering layer: the scene is rasterized into a
//! plain character framebuffer, which is then flushed to a display sink.
//! It intentionally avoids widget/layout libraries.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the per-frame hot path allocation-free
//! - Treat the terminal as a replaceable [`DisplaySink`]

pub mod fb;
pub mod raster;
pub mod renderer;
pub mod scene_view;

pub use tui_wireframe_core as core;
pub use tui_wireframe_types as types;

pub use fb::{FrameBuffer, BLANK};
pub use raster::{draw_line, LinePoints};
pub use renderer::{
    encode_frame_into, force_restore_terminal, DisplayError, DisplaySink, TerminalRenderer,
};
pub use scene_view::{status_line, SceneView, CONTROLS_HINT};
