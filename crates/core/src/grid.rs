//! Row-major 2D container.

use std::ops::{Index, IndexMut};

/// Fixed-size grid addressed by `(col, row)` or by flat row-major index.
///
/// Invariant: `cells.len() == width * height`, and `index(col, row) = row * width + col`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u16,
    height: u16,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn new(width: u16, height: u16, fill: T) -> Self {
        let len = (width as usize) * (height as usize);
        let grid = Self {
            width,
            height,
            cells: vec![fill; len],
        };
        assert_eq!(grid.cells.len(), grid.len_for_dims());
        grid
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn len_for_dims(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline(always)]
    pub fn index_of(&self, col: u16, row: u16) -> Option<usize> {
        if col >= self.width || row >= self.height {
            return None;
        }
        Some((row as usize) * (self.width as usize) + (col as usize))
    }

    pub fn get(&self, col: u16, row: u16) -> Option<&T> {
        self.index_of(col, row).map(|i| &self.cells[i])
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    /// One row of `width` consecutive cells.
    pub fn row(&self, row: u16) -> Option<&[T]> {
        if row >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = (row as usize) * w;
        Some(&self.cells[start..start + w])
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.height).filter_map(move |r| self.row(r))
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, i: usize) -> &T {
        &self.cells[i]
    }
}

impl<T> IndexMut<usize> for Grid<T> {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.cells[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_addressing() {
        let g = Grid::new(5, 3, 0u8);
        assert_eq!(g.len(), 15);
        assert_eq!(g.index_of(0, 0), Some(0));
        assert_eq!(g.index_of(4, 0), Some(4));
        assert_eq!(g.index_of(0, 1), Some(5));
        assert_eq!(g.index_of(4, 2), Some(14));
        assert_eq!(g.index_of(5, 0), None);
        assert_eq!(g.index_of(0, 3), None);
    }

    #[test]
    fn test_rows_slice_consecutive_cells() {
        let mut g = Grid::new(3, 2, '.');
        g[4] = 'x';
        let rows: Vec<String> = g.rows().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, vec!["...".to_string(), ".x.".to_string()]);
        assert!(g.row(2).is_none());
    }

    #[test]
    fn test_fill_overwrites_all() {
        let mut g = Grid::new(4, 4, 1i32);
        g[7] = 9;
        g.fill(0);
        assert!(g.cells().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_empty_grid() {
        let g = Grid::new(0, 10, 0.0f32);
        assert!(g.is_empty());
        assert_eq!(g.rows().filter(|r| !r.is_empty()).count(), 0);
    }
}
