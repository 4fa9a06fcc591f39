//! Traversal order for a move.
//!
//! Cells are visited starting from the side the vector points toward, so a
//! tile never overtakes the one ahead of it and merges resolve
//! nearest-neighbour first.

use arrayvec::ArrayVec;

use crate::types::{Position, Vector, MAX_GRID_SIZE};

/// Row and column visiting order for one move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal {
    pub rows: ArrayVec<usize, MAX_GRID_SIZE>,
    pub cols: ArrayVec<usize, MAX_GRID_SIZE>,
}

impl Traversal {
    /// Every cell in visiting order (rows outer, columns inner)
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.rows
            .iter()
            .flat_map(move |&row| self.cols.iter().map(move |&col| Position::new(row, col)))
    }
}

/// Build the visiting order for `vector` on a `size` x `size` grid.
///
/// `size` is clamped to [`MAX_GRID_SIZE`].
pub fn traversal(size: usize, vector: Vector) -> Traversal {
    let size = size.min(MAX_GRID_SIZE);
    let mut rows: ArrayVec<usize, MAX_GRID_SIZE> = (0..size).collect();
    let mut cols: ArrayVec<usize, MAX_GRID_SIZE> = (0..size).collect();

    // Always traverse from the farthest cell in the chosen direction
    if vector.row == 1 {
        rows.reverse();
    }
    if vector.col == 1 {
        cols.reverse();
    }

    Traversal { rows, cols }
}
