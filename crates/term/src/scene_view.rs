//! SceneView: maps `core::SceneState` into a character grid.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::{floor_segments, Projector, SceneState, CUBE_EDGES};
use crate::fb::FrameBuffer;
use crate::raster::draw_line;
use crate::types::{Projected, FLOOR_GLYPH};

/// Controls hint shown on the second overlay row.
pub const CONTROLS_HINT: &str = "WASD=Move, QE=Turn, Space/C=Up/Down, P=Pause, X=Exit";

/// Draws the floor grid, the cube wireframe and the status overlay.
#[derive(Debug, Clone, Copy)]
pub struct SceneView {
    projector: Projector,
    overlay: bool,
}

impl SceneView {
    /// View for a grid of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            projector: Projector::new(width, height),
            overlay: true,
        }
    }

    pub fn for_buffer(fb: &FrameBuffer) -> Self {
        Self::new(fb.width(), fb.height())
    }

    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = overlay;
        self
    }

    pub fn projector(&self) -> &Projector {
        &self.projector
    }

    /// Render a full frame into an existing buffer.
    ///
    /// This is the allocation-free hot path: the buffer is reused across
    /// frames and the overlay is formatted on the stack.
    pub fn render_into(&self, scene: &SceneState, fb: &mut FrameBuffer) {
        fb.clear();
        self.draw_floor(scene, fb);
        self.draw_cube(scene, fb);
        if self.overlay {
            self.draw_overlay(scene, fb);
        }
    }

    /// Convenience helper that allocates a new buffer.
    pub fn render(&self, scene: &SceneState, width: u16, height: u16) -> FrameBuffer {
        let mut fb = FrameBuffer::new(width, height);
        self.render_into(scene, &mut fb);
        fb
    }

    /// Floor lines are drawn only when both endpoints are in front of the
    /// near plane; partially visible lines are skipped, not clipped.
    pub fn draw_floor(&self, scene: &SceneState, fb: &mut FrameBuffer) {
        for seg in floor_segments() {
            let a = self.projector.project(seg.start, &scene.camera);
            let b = self.projector.project(seg.end, &scene.camera);
            if let (Some(a), Some(b)) = (a, b) {
                draw_line(fb, a, b, FLOOR_GLYPH);
            }
        }
    }

    /// Each vertex is projected once; an edge is drawn only if both of
    /// its vertices survived the near-plane test.
    pub fn draw_cube(&self, scene: &SceneState, fb: &mut FrameBuffer) {
        let projected: [Projected; 8] = scene
            .cube_vertices()
            .map(|v| self.projector.project(v, &scene.camera));

        for edge in CUBE_EDGES {
            if let (Some(a), Some(b)) = (projected[edge.a], projected[edge.b]) {
                draw_line(fb, a, b, edge.glyph);
            }
        }
    }

    /// Rows 0 and 1: camera status and the controls hint, clipped to width.
    pub fn draw_overlay(&self, scene: &SceneState, fb: &mut FrameBuffer) {
        let line = status_line(scene);
        fb.put_str(0, 0, &line);
        fb.put_str(0, 1, CONTROLS_HINT);
    }
}

/// `Pos: (x, y, z) Yaw: N°`, with ` [PAUSED]` appended while paused.
pub fn status_line(scene: &SceneState) -> ArrayString<128> {
    let mut line = ArrayString::<128>::new();
    let pos = scene.camera.position;
    // Capacity overflow only truncates the overlay.
    let _ = write!(
        line,
        "Pos: ({:.1}, {:.1}, {:.1}) Yaw: {:.0}°",
        pos.x,
        pos.y,
        pos.z,
        scene.camera.yaw_degrees()
    );
    if scene.is_paused() {
        let _ = line.try_push_str(" [PAUSED]");
    }
    line
}
