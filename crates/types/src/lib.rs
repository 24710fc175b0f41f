//! Shared types module - vectors, screen points, camera actions and constants
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used from the pure scene logic, the terminal layer and the input thread
//! alike.
//!
//! # Coordinate System
//!
//! - **World space**: right-handed, `+y` is up, the camera looks along `+z`
//!   when its yaw is zero.
//! - **Screen space**: integer columns and rows, origin at the top-left,
//!   rows grow downward.
//!
//! # Tuning Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_WIDTH` | 80 | Default character grid columns |
//! | `GRID_HEIGHT` | 24 | Default character grid rows |
//! | `FOCAL_LENGTH` | 20.0 | Perspective scale numerator |
//! | `NEAR_PLANE` | 0.1 | Minimum camera-space depth that is drawn |
//! | `MOVE_STEP` | 0.5 | Camera translation per key press |
//! | `TURN_STEP` | π/24 | Camera yaw change per key press (7.5°) |
//! | `CLIMB_STEP` | 0.5 | Camera height change per key press |
//! | `CUBE_SPIN_PER_FRAME` | 0.02 | Cube rotation per unpaused frame (radians) |
//! | `TARGET_FPS` | 60 | Default frame rate |
//! | `POLL_INTERVAL_MS` | 10 | Keyboard idle poll interval |
//!
//! # Examples
//!
//! ```
//! use tui_wireframe_types::{CameraAction, Vec3};
//!
//! let a = Vec3::new(1.0, 2.0, 3.0);
//! let b = Vec3::new(0.5, 0.5, 0.5);
//! assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
//! assert_eq!(b * 2.0, Vec3::new(1.0, 1.0, 1.0));
//!
//! assert_eq!(CameraAction::TurnLeft.as_str(), "turnLeft");
//! ```

use std::f64::consts::PI;
use std::ops::{Add, Mul, Neg, Sub};

/// Default grid width in columns (80)
pub const GRID_WIDTH: u16 = 80;

/// Default grid height in rows (24)
pub const GRID_HEIGHT: u16 = 24;

/// Perspective scale numerator: screen offset = coordinate * FOCAL_LENGTH / depth
pub const FOCAL_LENGTH: f64 = 20.0;

/// Points with camera-space depth at or below this are rejected
pub const NEAR_PLANE: f64 = 0.1;

/// Camera translation per movement key press (world units)
pub const MOVE_STEP: f64 = 0.5;

/// Camera yaw change per turn key press (π/24 radians = 7.5°)
pub const TURN_STEP: f64 = PI / 24.0;

/// Camera height change per vertical key press (world units)
pub const CLIMB_STEP: f64 = 0.5;

/// Cube rotation advanced every unpaused frame (radians)
pub const CUBE_SPIN_PER_FRAME: f64 = 0.02;

/// Half the cube's edge length (edge length 2.0)
pub const CUBE_HALF_EXTENT: f64 = 1.0;

/// Floor grid spans `-FLOOR_EXTENT..=FLOOR_EXTENT` on both horizontal axes
pub const FLOOR_EXTENT: i32 = 10;

/// Distance between floor grid lines
pub const FLOOR_SPACING: usize = 4;

/// Default target frame rate (frames per second)
pub const TARGET_FPS: u32 = 60;

/// Keyboard poll interval when no key is pending (milliseconds)
pub const POLL_INTERVAL_MS: u64 = 10;

/// Glyph for the cube's front and back face edges
pub const FACE_GLYPH: char = '#';

/// Glyph for the four edges joining front and back faces
pub const CONNECTING_GLYPH: char = '*';

/// Glyph for floor grid lines
pub const FLOOR_GLYPH: char = '|';

/// Where the camera starts: above the floor, behind the cube, looking at it
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 3.0, -8.0);

/// World-space placement of the cube's center
pub const CUBE_OFFSET: Vec3 = Vec3::new(0.0, 1.0, 0.0);

/// A 3D point or direction.
///
/// Value type: arithmetic returns new instances.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3::new(0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate around the vertical axis by `angle` radians.
    ///
    /// `x' = x·cos − z·sin`, `z' = x·sin + z·cos`; `y` is unchanged.
    pub fn rotate_y(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            x: self.x * cos - self.z * sin,
            y: self.y,
            z: self.x * sin + self.z * cos,
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, scalar: f64) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// An integer character-cell coordinate.
///
/// Signed so that projections landing off-screen can still be rasterized;
/// the grid drops the out-of-bounds writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Result of projecting a 3D point: `None` means behind the near plane.
pub type Projected = Option<ScreenPoint>;

/// Discrete camera/animation commands produced from key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAction {
    /// Step along the camera's forward vector
    MoveForward,
    /// Step against the camera's forward vector
    MoveBackward,
    /// Step against the camera's right vector
    StrafeLeft,
    /// Step along the camera's right vector
    StrafeRight,
    /// Decrease yaw by one turn step
    TurnLeft,
    /// Increase yaw by one turn step
    TurnRight,
    /// Raise the camera
    Ascend,
    /// Lower the camera
    Descend,
    /// Freeze or resume the cube's spin
    TogglePause,
    /// Stop the frame loop
    Quit,
}

impl CameraAction {
    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraAction::MoveForward => "moveForward",
            CameraAction::MoveBackward => "moveBackward",
            CameraAction::StrafeLeft => "strafeLeft",
            CameraAction::StrafeRight => "strafeRight",
            CameraAction::TurnLeft => "turnLeft",
            CameraAction::TurnRight => "turnRight",
            CameraAction::Ascend => "ascend",
            CameraAction::Descend => "descend",
            CameraAction::TogglePause => "togglePause",
            CameraAction::Quit => "quit",
        }
    }
}
