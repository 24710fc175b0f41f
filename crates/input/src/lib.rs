//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::CameraAction`]s and runs
//! the keyboard polling thread that feeds them to the frame loop over a
//! channel. The polling thread and the frame loop share only the channel and
//! a cooperative `running` flag.

pub mod map;
pub mod source;

pub use tui_wireframe_types as types;

pub use map::{map_key, should_quit};
pub use source::{spawn_input_thread, CrosstermKeys, InputError, KeySource};
