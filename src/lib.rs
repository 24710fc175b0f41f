//! TUI Wireframe (workspace facade crate).
//!
//! Re-exports the member crates as `tui_wireframe::{core,engine,input,term,types}`
//! so binaries, tests and benches share one import path.

pub use tui_wireframe_core as core;
pub use tui_wireframe_engine as engine;
pub use tui_wireframe_input as input;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;
