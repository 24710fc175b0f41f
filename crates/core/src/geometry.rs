//! Fixed scene geometry: the cube template and the floor grid.
//!
//! The cube template is never mutated; every frame produces a rotated,
//! translated copy via [`cube_vertices`].

use arrayvec::ArrayVec;

use crate::types::{
    Vec3, CONNECTING_GLYPH, CUBE_HALF_EXTENT, CUBE_OFFSET, FACE_GLYPH, FLOOR_EXTENT, FLOOR_SPACING,
};

const H: f64 = CUBE_HALF_EXTENT;

/// Cube vertices in object space, centered on the origin.
///
/// Indices 0-3 form the front face (`z = -H`), 4-7 the back face
/// (`z = +H`), each ordered bottom-left, bottom-right, top-right, top-left.
pub const CUBE_TEMPLATE: [Vec3; 8] = [
    Vec3::new(-H, -H, -H),
    Vec3::new(H, -H, -H),
    Vec3::new(H, H, -H),
    Vec3::new(-H, H, -H),
    Vec3::new(-H, -H, H),
    Vec3::new(H, -H, H),
    Vec3::new(H, H, H),
    Vec3::new(-H, H, H),
];

/// A cube edge: two vertex indices and the glyph it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub glyph: char,
}

impl Edge {
    const fn new(a: usize, b: usize, glyph: char) -> Self {
        Self { a, b, glyph }
    }
}

/// The 12 cube edges: 8 face edges, then 4 connecting edges.
pub const CUBE_EDGES: [Edge; 12] = [
    // Front face
    Edge::new(0, 1, FACE_GLYPH),
    Edge::new(1, 2, FACE_GLYPH),
    Edge::new(2, 3, FACE_GLYPH),
    Edge::new(3, 0, FACE_GLYPH),
    // Back face
    Edge::new(4, 5, FACE_GLYPH),
    Edge::new(5, 6, FACE_GLYPH),
    Edge::new(6, 7, FACE_GLYPH),
    Edge::new(7, 4, FACE_GLYPH),
    // Front to back
    Edge::new(0, 4, CONNECTING_GLYPH),
    Edge::new(1, 5, CONNECTING_GLYPH),
    Edge::new(2, 6, CONNECTING_GLYPH),
    Edge::new(3, 7, CONNECTING_GLYPH),
];

/// World-space cube vertices for a given spin angle.
///
/// Spins the template around its own vertical axis, then places it at
/// [`CUBE_OFFSET`].
pub fn cube_vertices(angle: f64) -> [Vec3; 8] {
    CUBE_TEMPLATE.map(|v| v.rotate_y(angle) + CUBE_OFFSET)
}

/// A straight world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Vec3,
    pub end: Vec3,
}

/// Upper bound on floor segments for the default extent and spacing.
pub const MAX_FLOOR_SEGMENTS: usize = 16;

/// Floor grid lines on `y = 0`.
///
/// For every offset `i` in `-FLOOR_EXTENT..=FLOOR_EXTENT` stepping by
/// `FLOOR_SPACING`, one line runs along `x` at `z = i` and one along `z`
/// at `x = i`.
pub fn floor_segments() -> ArrayVec<Segment, MAX_FLOOR_SEGMENTS> {
    let mut out = ArrayVec::new();
    let e = FLOOR_EXTENT as f64;
    for i in (-FLOOR_EXTENT..=FLOOR_EXTENT).step_by(FLOOR_SPACING) {
        let i = i as f64;
        out.push(Segment {
            start: Vec3::new(-e, 0.0, i),
            end: Vec3::new(e, 0.0, i),
        });
        out.push(Segment {
            start: Vec3::new(i, 0.0, -e),
            end: Vec3::new(i, 0.0, e),
        });
    }
    out
}
