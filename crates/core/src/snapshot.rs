//! Grid snapshots handed to renderers.
//!
//! A [`Grid`] is an owned copy of the board cells. Mutating it never affects
//! the game it was taken from.

use std::ops::{Index, IndexMut};

use crate::types::EMPTY;

/// Row-major `height x width` copy of the board cells.
///
/// `grid[row]` yields the row as a slice, so `grid[row][col]` reads one cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Create an all-empty grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at `(row, col)`, `None` if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn row(&self, row: usize) -> Option<&[u8]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).map(move |row| &self[row])
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}

impl Index<usize> for Grid {
    type Output = [u8];

    fn index(&self, row: usize) -> &[u8] {
        assert!(row < self.height, "row {} out of range", row);
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }
}

impl IndexMut<usize> for Grid {
    fn index_mut(&mut self, row: usize) -> &mut [u8] {
        assert!(row < self.height, "row {} out of range", row);
        let start = row * self.width;
        &mut self.cells[start..start + self.width]
    }
}
