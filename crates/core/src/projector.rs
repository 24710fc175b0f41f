//! Perspective projection onto the character grid.
//!
//! This module is pure (no I/O). A projection either yields an integer
//! screen coordinate or `None` when the point is at or behind the near
//! plane; rejection is never an error.

use crate::camera::Camera;
use crate::types::{Projected, ScreenPoint, Vec3, FOCAL_LENGTH, NEAR_PLANE};

/// Maps camera-space points to grid cells.
///
/// Coordinates are rounded half away from zero (`f64::round`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    half_width: f64,
    half_height: f64,
    focal_length: f64,
    near_plane: f64,
}

impl Projector {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            half_width: width as f64 / 2.0,
            half_height: height as f64 / 2.0,
            focal_length: FOCAL_LENGTH,
            near_plane: NEAR_PLANE,
        }
    }

    pub fn with_focal_length(mut self, focal_length: f64) -> Self {
        self.focal_length = focal_length;
        self
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    pub fn near_plane(&self) -> f64 {
        self.near_plane
    }

    /// Project a world-space point as seen from `camera`.
    #[inline]
    pub fn project(&self, world: Vec3, camera: &Camera) -> Projected {
        self.project_view(camera.to_view(world))
    }

    /// Project a point already in camera space.
    ///
    /// Screen `y` is flipped: world up is `+y`, screen rows grow downward.
    pub fn project_view(&self, view: Vec3) -> Projected {
        if view.z <= self.near_plane {
            return None;
        }
        let scale = self.focal_length / view.z;
        let x = (view.x * scale + self.half_width).round();
        let y = (-view.y * scale + self.half_height).round();
        Some(ScreenPoint::new(x as i32, y as i32))
    }
}
