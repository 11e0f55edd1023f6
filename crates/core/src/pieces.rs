//! Pieces module - shape templates and the live piece value
//!
//! A piece is a [`ShapeKind`] plus an anchor position. Its four absolute cells
//! are recomputed from the kind's template on demand, so moving a piece only
//! shifts the anchor.

use crate::types::{Coord, ShapeKind};

/// Offset of a single cell relative to the piece anchor, as `(d_row, d_col)`
pub type CellOffset = (i16, i16);

/// Shape of a piece - 4 cell offsets from the anchor
pub type ShapeTemplate = [CellOffset; 4];

/// Get the cell offsets for a shape kind
pub fn get_template(kind: ShapeKind) -> ShapeTemplate {
    match kind {
        // Vertical bar with a foot to the right.
        ShapeKind::L => [(0, 0), (1, 0), (2, 0), (2, 1)],
        ShapeKind::T => [(0, 1), (1, 0), (1, 1), (1, 2)],
        ShapeKind::I => [(0, 0), (0, 1), (0, 2), (0, 3)],
    }
}

/// Anchor a freshly spawned piece starts at, near the top-center columns
pub fn spawn_anchor(kind: ShapeKind) -> Coord {
    match kind {
        ShapeKind::L => (0, 4),
        ShapeKind::T => (0, 3),
        ShapeKind::I => (0, 3),
    }
}

/// A falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub row: i16,
    pub col: i16,
}

impl Piece {
    /// Create a piece at its spawn position
    pub fn spawn(kind: ShapeKind) -> Self {
        let (row, col) = spawn_anchor(kind);
        Self { kind, row, col }
    }

    /// Create a piece with an explicit anchor
    pub fn at(kind: ShapeKind, row: i16, col: i16) -> Self {
        Self { kind, row, col }
    }

    pub fn color(&self) -> u8 {
        self.kind.color()
    }

    /// Absolute board cells occupied by this piece
    pub fn cells(&self) -> [Coord; 4] {
        get_template(self.kind)
            .map(|(dr, dc)| (self.row.saturating_add(dr), self.col.saturating_add(dc)))
    }

    /// Same piece with the anchor moved by the given delta
    pub fn shifted(&self, d_row: i16, d_col: i16) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
            ..*self
        }
    }

    pub fn occupies(&self, row: i16, col: i16) -> bool {
        self.cells().contains(&(row, col))
    }
}
