//! Paired glyph and depth buffers.
//!
//! Depth is stored as `1 / z`, so zero means "nothing drawn" and a larger
//! value is nearer. A write lands only when it is strictly nearer than what
//! the cell already holds, which makes the result independent of draw order.

use crate::grid::Grid;
use crate::types::BLANK_GLYPH;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    glyphs: Grid<char>,
    depth: Grid<f32>,
}

impl FrameBuffer {
    /// Allocate both grids once. The size never changes afterwards.
    pub fn new(width: u16, height: u16) -> Self {
        let fb = Self {
            glyphs: Grid::new(width, height, BLANK_GLYPH),
            depth: Grid::new(width, height, 0.0),
        };
        assert_eq!(fb.glyphs.len(), fb.depth.len());
        fb
    }

    pub fn width(&self) -> u16 {
        self.glyphs.width()
    }

    pub fn height(&self) -> u16 {
        self.glyphs.height()
    }

    #[inline(always)]
    pub fn index(&self, col: u16, row: u16) -> Option<usize> {
        self.glyphs.index_of(col, row)
    }

    /// Depth-tested write at a flat index.
    ///
    /// Returns `true` when the cell was updated. `index` must be in range.
    #[inline]
    pub fn write_if_nearer(&mut self, index: usize, depth: f32, glyph: char) -> bool {
        if depth > self.depth[index] {
            self.depth[index] = depth;
            self.glyphs[index] = glyph;
            true
        } else {
            false
        }
    }

    /// Restore every glyph to blank and every depth to zero.
    pub fn reset(&mut self) {
        self.glyphs.fill(BLANK_GLYPH);
        self.depth.fill(0.0);
    }

    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        self.glyphs.get(col, row).copied()
    }

    pub fn depth(&self, col: u16, row: u16) -> Option<f32> {
        self.depth.get(col, row).copied()
    }

    pub fn glyphs(&self) -> &Grid<char> {
        &self.glyphs
    }

    pub fn depths(&self) -> &Grid<f32> {
        &self.depth
    }

    /// Number of cells holding something other than the blank glyph.
    pub fn drawn_cells(&self) -> usize {
        self.glyphs
            .cells()
            .iter()
            .filter(|&&g| g != BLANK_GLYPH)
            .count()
    }
}
