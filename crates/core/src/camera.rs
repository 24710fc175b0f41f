//! Yaw-only camera.

use crate::types::{CameraAction, Vec3, CAMERA_START, CLIMB_STEP, MOVE_STEP, TURN_STEP};

/// Camera position and heading.
///
/// At yaw zero the camera looks along `+z`. Positive yaw turns right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    /// Heading around the vertical axis, in radians.
    pub yaw: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CAMERA_START, 0.0)
    }
}

impl Camera {
    pub fn new(position: Vec3, yaw: f64) -> Self {
        Self { position, yaw }
    }

    /// Unit vector the camera looks along, in the ground plane.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, self.yaw.cos())
    }

    /// Unit vector to the camera's right, in the ground plane.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Transform a world-space point into camera space.
    ///
    /// Translates by the camera position, then undoes the camera yaw.
    /// The result's `z` is the depth in front of the camera.
    #[inline]
    pub fn to_view(&self, world: Vec3) -> Vec3 {
        (world - self.position).rotate_y(-self.yaw)
    }

    pub fn yaw_degrees(&self) -> f64 {
        self.yaw.to_degrees()
    }

    /// Apply a movement or turn action.
    ///
    /// Returns `false` for actions that do not concern the camera
    /// (pause, quit), leaving the camera untouched.
    pub fn apply(&mut self, action: CameraAction) -> bool {
        match action {
            CameraAction::MoveForward => self.position = self.position + self.forward() * MOVE_STEP,
            CameraAction::MoveBackward => self.position = self.position - self.forward() * MOVE_STEP,
            CameraAction::StrafeLeft => self.position = self.position - self.right() * MOVE_STEP,
            CameraAction::StrafeRight => self.position = self.position + self.right() * MOVE_STEP,
            CameraAction::TurnLeft => self.yaw -= TURN_STEP,
            CameraAction::TurnRight => self.yaw += TURN_STEP,
            CameraAction::Ascend => self.position.y += CLIMB_STEP,
            CameraAction::Descend => self.position.y -= CLIMB_STEP,
            CameraAction::TogglePause | CameraAction::Quit => return false,
        }
        true
    }
}
