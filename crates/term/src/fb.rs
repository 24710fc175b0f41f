//! Character grid the scene is rasterized into.

/// Glyph used for empty cells.
pub const BLANK: char = ' ';

/// Fixed-size 2D grid of characters.
///
/// Dimensions are set at construction and never change. Writes outside the
/// grid are silently dropped so off-screen geometry never fails a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write one glyph. Out-of-bounds writes are ignored.
    ///
    /// Control characters would corrupt the terminal, so they are stored
    /// as `?` to keep every cell a single printable glyph.
    #[inline]
    pub fn put_char(&mut self, x: i32, y: i32, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = if ch.is_control() { '?' } else { ch };
        }
    }

    /// Write a string left to right, clipped at the right edge.
    pub fn put_str(&mut self, x: i32, y: i32, s: &str) {
        for (i, ch) in s.chars().enumerate() {
            let cx = x.saturating_add(i as i32);
            if cx >= self.width as i32 {
                break;
            }
            self.put_char(cx, y, ch);
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|&c| c == BLANK)
    }

    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        Some(&self.cells[start..start + w])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // `max(1)` keeps `chunks` valid for a zero-width grid.
        self.cells.chunks(self.width.max(1) as usize)
    }

    /// Grid contents as text, rows joined by `\n`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.height as usize);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter());
        }
        out
    }
}
