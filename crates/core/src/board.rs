//! Board module - manages the game grid
//!
//! The board is a fixed `height x width` grid (10x20 by default) where each cell
//! is either empty (`0`) or holds the color tag of the piece that filled it.
//! Uses flat row-major storage; coordinates are `(row, col)` with row 0 at the top.
//!
//! The live piece is written into the grid as soon as it spawns, so placing it
//! again when it locks changes nothing.

use crate::pieces::Piece;
use crate::snapshot::Grid;
use crate::types::EMPTY;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<u8>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(row * self.width + col)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<u8> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, value: u8) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_free(&self, row: i16, col: i16) -> bool {
        self.get(row, col) == Some(EMPTY)
    }

    /// True iff every cell of the piece is in bounds and empty.
    pub fn can_place(&self, piece: &Piece) -> bool {
        piece.cells().iter().all(|&(r, c)| self.is_free(r, c))
    }

    /// True iff the piece, shifted by the delta, lies in bounds on empty cells.
    ///
    /// Cells the piece itself currently occupies count as empty, since the live
    /// piece is already written into the grid. The piece must have been placed
    /// on this board; otherwise the answer is meaningless.
    pub fn can_move(&self, piece: &Piece, d_row: i16, d_col: i16) -> bool {
        piece
            .shifted(d_row, d_col)
            .cells()
            .iter()
            .all(|&(r, c)| {
                self.is_free(r, c) || (piece.occupies(r, c) && self.get(r, c).is_some())
            })
    }

    /// Write the piece's color into each of its cells.
    pub fn place(&mut self, piece: &Piece) {
        let color = piece.color();
        for (r, c) in piece.cells() {
            self.set(r, c, color);
        }
    }

    /// Commit the piece into the grid. Same effect as [`Board::place`].
    pub fn lock(&mut self, piece: &Piece) {
        self.place(piece);
    }

    /// Clear the piece's cells, shift it by the delta and write it back.
    ///
    /// Callers must check [`Board::can_move`] with the same delta first, and
    /// the piece must already be placed on this board.
    pub fn move_piece(&mut self, piece: &mut Piece, d_row: i16, d_col: i16) {
        debug_assert!(self.is_placed(piece));
        debug_assert!(self.can_move(piece, d_row, d_col));

        for (r, c) in piece.cells() {
            self.set(r, c, EMPTY);
        }
        *piece = piece.shifted(d_row, d_col);
        self.place(piece);
    }

    /// True iff every cell of the piece is in bounds and holds its color.
    pub fn is_placed(&self, piece: &Piece) -> bool {
        let color = piece.color();
        piece
            .cells()
            .iter()
            .all(|&(r, c)| self.get(r, c) == Some(color))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height || self.width == 0 {
            return false;
        }
        let start = row * self.width;
        self.cells[start..start + self.width]
            .iter()
            .all(|&cell| cell != EMPTY)
    }

    /// Clear a row and shift all rows above down by one.
    /// Row 0 becomes empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }

        let width = self.width;

        // Shift all rows above down by one
        // Note: copy_within handles overlapping ranges safely
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Clear all full rows in a single top-to-bottom sweep.
    ///
    /// After a row is cleared the row shifted into its place is not checked
    /// again. Returns the number of rows cleared.
    pub fn clear_full_lines(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.height {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Defensive copy of the grid for rendering
    pub fn snapshot(&self) -> Grid {
        Grid::from_cells(self.width, self.height, self.cells.clone())
    }

    /// Create from row slices for testing
    #[cfg(test)]
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        assert!(rows.iter().all(|r| r.len() == width));

        Self {
            width,
            height,
            cells: rows.concat(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};
        Self::new(BOARD_WIDTH as usize, BOARD_HEIGHT as usize)
    }
}
