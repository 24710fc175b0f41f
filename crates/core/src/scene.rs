//! Scene state: camera, cube spin and pause flag.
//!
//! Mutated only through [`SceneState::apply`] (discrete key actions) and
//! [`SceneState::advance`] (one call per rendered frame).

use std::f64::consts::TAU;

use crate::camera::Camera;
use crate::geometry::cube_vertices;
use crate::types::{CameraAction, Vec3, CUBE_SPIN_PER_FRAME};

/// What the caller should do after applying an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Continue,
    Quit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    pub camera: Camera,
    cube_angle: f64,
    spin_per_frame: f64,
    paused: bool,
    frame: u64,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneState {
    pub fn new() -> Self {
        Self::with_camera(Camera::default())
    }

    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            cube_angle: 0.0,
            spin_per_frame: CUBE_SPIN_PER_FRAME,
            paused: false,
            frame: 0,
        }
    }

    pub fn with_spin_per_frame(mut self, radians: f64) -> Self {
        self.spin_per_frame = radians;
        self
    }

    pub fn apply(&mut self, action: CameraAction) -> ActionOutcome {
        match action {
            CameraAction::Quit => return ActionOutcome::Quit,
            CameraAction::TogglePause => {
                self.paused = !self.paused;
                tracing::debug!(paused = self.paused, "cube animation toggled");
            }
            other => {
                self.camera.apply(other);
            }
        }
        ActionOutcome::Continue
    }

    /// Advance one frame. The cube only spins while not paused.
    pub fn advance(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        if !self.paused {
            self.cube_angle = (self.cube_angle + self.spin_per_frame).rem_euclid(TAU);
        }
    }

    pub fn cube_angle(&self) -> f64 {
        self.cube_angle
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// World-space cube vertices for the current spin angle.
    pub fn cube_vertices(&self) -> [Vec3; 8] {
        cube_vertices(self.cube_angle)
    }
}
