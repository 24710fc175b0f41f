//! Core scene module - pure, deterministic, and testable
//!
//! This module contains the camera model, the perspective projector, the
//! fixed scene geometry and the animation state. It has **no dependencies**
//! on the terminal, keyboard or clock, making it:
//!
//! - **Deterministic**: the same actions and frame count give the same scene
//! - **Testable**: projection and camera math are plain functions of their inputs
//! - **Portable**: any character grid or display can consume the projected points
//!
//! # Module Structure
//!
//! - [`camera`]: position + yaw, forward/right vectors, world → camera space
//! - [`projector`]: camera space → integer screen coordinates with near-plane rejection
//! - [`geometry`]: the cube template (8 vertices, 12 glyph-tagged edges) and floor grid
//! - [`scene`]: camera + cube spin + pause flag, mutated by [`CameraAction`]s
//!
//! # Example
//!
//! ```
//! use tui_wireframe_core::{Projector, SceneState};
//! use tui_wireframe_types::CameraAction;
//!
//! let mut scene = SceneState::new();
//! scene.apply(CameraAction::MoveForward);
//! scene.advance();
//!
//! let projector = Projector::new(80, 24);
//! let center = projector.project(scene.cube_vertices()[0], &scene.camera);
//! assert!(center.is_some());
//! ```
//!
//! [`CameraAction`]: tui_wireframe_types::CameraAction

pub mod camera;
pub mod geometry;
pub mod projector;
pub mod scene;

pub use tui_wireframe_types as types;

// Re-export commonly used types for convenience
pub use camera::Camera;
pub use geometry::{cube_vertices, floor_segments, Edge, Segment, CUBE_EDGES, CUBE_TEMPLATE};
pub use projector::Projector;
pub use scene::{ActionOutcome, SceneState};
