//! Frame loop module.
//!
//! Ties the pure scene ([`crate::core`]) to a display ([`crate::term`]):
//! each iteration drains pending camera actions, advances the animation,
//! renders the grid and hands it to a [`DisplaySink`](crate::term::DisplaySink),
//! then waits out a fixed delay on the action channel.
//!
//! # Configuration
//!
//! [`LoopConfig::from_env`] reads:
//!
//! - `WIREFRAME_WIDTH` / `WIREFRAME_HEIGHT`: grid size (default 80x24)
//! - `WIREFRAME_FPS`: target frame rate (default 60)
//! - `WIREFRAME_POLL_MS`: keyboard idle poll interval (default 10)
//! - `WIREFRAME_LOG_PATH`: write logs to this file (default: no logging)

pub mod config;
pub mod frame_loop;

pub use tui_wireframe_core as core;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;

pub use config::LoopConfig;
pub use frame_loop::{FrameLoop, LoopPhase, LoopSummary};
