//! Bresenham line rasterization onto the character grid.

use crate::fb::FrameBuffer;
use crate::types::ScreenPoint;

/// Cells visited by an integer Bresenham walk from `from` to `to`,
/// both endpoints included.
///
/// Works for any slope and either direction. Arithmetic is done in `i64`
/// so far off-screen endpoints cannot overflow the error term.
#[derive(Debug, Clone)]
pub struct LinePoints {
    x: i64,
    y: i64,
    x_end: i64,
    y_end: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    done: bool,
}

impl LinePoints {
    pub fn new(from: ScreenPoint, to: ScreenPoint) -> Self {
        let (x1, y1) = (from.x as i64, from.y as i64);
        let (x2, y2) = (to.x as i64, to.y as i64);
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        Self {
            x: x1,
            y: y1,
            x_end: x2,
            y_end: y2,
            dx,
            dy,
            sx: if x1 < x2 { 1 } else { -1 },
            sy: if y1 < y2 { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for LinePoints {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.done {
            return None;
        }
        let current = ScreenPoint::new(self.x as i32, self.y as i32);
        if self.x == self.x_end && self.y == self.y_end {
            self.done = true;
            return Some(current);
        }
        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
        Some(current)
    }
}

/// Draw `glyph` into every cell of the line from `from` to `to`.
///
/// Cells outside the grid are dropped by [`FrameBuffer::put_char`].
pub fn draw_line(fb: &mut FrameBuffer, from: ScreenPoint, to: ScreenPoint, glyph: char) {
    if entirely_outside(fb, from, to) {
        return;
    }
    for p in LinePoints::new(from, to) {
        fb.put_char(p.x, p.y, glyph);
    }
}

// Both endpoints beyond the same edge: no cell of the line can be on the grid.
fn entirely_outside(fb: &FrameBuffer, a: ScreenPoint, b: ScreenPoint) -> bool {
    let w = fb.width() as i32;
    let h = fb.height() as i32;
    (a.x < 0 && b.x < 0) || (a.y < 0 && b.y < 0) || (a.x >= w && b.x >= w) || (a.y >= h && b.y >= h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    fn written(fb: &FrameBuffer) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..fb.height() as i32 {
            for x in 0..fb.width() as i32 {
                if fb.get(x, y) != Some(' ') {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn horizontal_line_writes_six_cells() {
        let mut fb = FrameBuffer::new(10, 3);
        draw_line(&mut fb, p(0, 0), p(5, 0), '#');
        assert_eq!(
            written(&fb),
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
        assert!((0..6).all(|x| fb.get(x, 0) == Some('#')));
    }

    #[test]
    fn zero_length_line_writes_one_cell() {
        let mut fb = FrameBuffer::new(5, 5);
        draw_line(&mut fb, p(2, 2), p(2, 2), '*');
        assert_eq!(written(&fb), vec![(2, 2)]);
    }

    #[test]
    fn vertical_line_bottom_to_top() {
        let mut fb = FrameBuffer::new(3, 6);
        draw_line(&mut fb, p(1, 5), p(1, 1), '|');
        assert_eq!(written(&fb), vec![(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn diagonal_is_one_cell_per_step() {
        let pts: Vec<_> = LinePoints::new(p(3, 3), p(0, 0)).collect();
        assert_eq!(pts, vec![p(3, 3), p(2, 2), p(1, 1), p(0, 0)]);
    }

    #[test]
    fn shallow_slope_is_connected_and_ends_at_endpoint() {
        let pts: Vec<_> = LinePoints::new(p(0, 0), p(7, 2)).collect();
        assert_eq!(pts.first(), Some(&p(0, 0)));
        assert_eq!(pts.last(), Some(&p(7, 2)));
        assert_eq!(pts.len(), 8);
        for w in pts.windows(2) {
            assert!((w[1].x - w[0].x).abs() <= 1 && (w[1].y - w[0].y).abs() <= 1);
        }
    }

    #[test]
    fn reversed_direction_visits_same_cell_count() {
        let fwd = LinePoints::new(p(1, 9), p(6, 2)).count();
        let rev = LinePoints::new(p(6, 2), p(1, 9)).count();
        assert_eq!(fwd, rev);
        assert_eq!(fwd, 8);
    }

    #[test]
    fn partially_offscreen_line_is_clipped_per_cell() {
        let mut fb = FrameBuffer::new(4, 1);
        draw_line(&mut fb, p(-3, 0), p(2, 0), '-');
        assert_eq!(fb.to_text(), "--- ");
    }

    #[test]
    fn offscreen_line_leaves_grid_untouched() {
        let mut fb = FrameBuffer::new(4, 4);
        draw_line(&mut fb, p(-100, -5), p(100, -1), '#');
        draw_line(&mut fb, p(-1000, 2), p(1000, 2), '#');
        assert_eq!(fb.get(0, 2), Some('#'));
        fb.clear();
        draw_line(&mut fb, p(10, 0), p(20, 3), '#');
        assert!(fb.is_blank());
    }
}
