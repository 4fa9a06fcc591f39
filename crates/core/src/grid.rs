//! Grid module - manages the square playing field
//!
//! The grid is an N x N matrix where each cell is empty or holds exactly one tile.
//! Uses a flat vector in row-major order (row * size + col).
//! Coordinates: (row, col), row grows downward, col grows rightward, both zero-based.

use arrayvec::ArrayVec;

use crate::tile::{Tile, TileId};
use crate::types::{Direction, Position, MAX_CELLS};

/// A grid cell: `None` when empty
pub type Cell = Option<Tile>;

/// The playing field - `size` x `size` cells in a flat vector
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    /// Calculate flat index from a position
    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(pos.row * self.size + pos.col)
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get cell at position
    /// Returns None if out of bounds
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.index(pos).map(|idx| self.cells[idx])
    }

    /// Tile at position, if in bounds and occupied
    pub fn tile(&self, pos: Position) -> Option<Tile> {
        self.get(pos).flatten()
    }

    /// Check if position is available (within bounds and empty)
    pub fn is_available(&self, pos: Position) -> bool {
        matches!(self.get(pos), Some(None))
    }

    /// Place a tile at its own position, replacing whatever was there.
    /// Returns false if the tile's position is out of bounds.
    pub fn insert(&mut self, tile: Tile) -> bool {
        match self.index(tile.position) {
            Some(idx) => {
                self.cells[idx] = Some(tile);
                true
            }
            None => false,
        }
    }

    /// Empty the cell at position, returning the tile that was there
    pub fn remove(&mut self, pos: Position) -> Option<Tile> {
        let idx = self.index(pos)?;
        self.cells[idx].take()
    }

    /// Move the tile at `from` to the empty cell `to`.
    /// Returns false (and changes nothing) if `from` is empty or `to` is unavailable.
    pub fn move_tile(&mut self, from: Position, to: Position) -> bool {
        if from == to || !self.is_available(to) {
            return false;
        }
        let Some(mut tile) = self.remove(from) else {
            return false;
        };
        tile.position = to;
        self.insert(tile)
    }

    /// All empty cells in row-major order
    ///
    /// Stack-only; grids are capped at [`MAX_CELLS`] cells.
    pub fn empty_cells(&self) -> ArrayVec<Position, MAX_CELLS> {
        let mut out = ArrayVec::new();
        for (idx, cell) in self.cells.iter().enumerate() {
            if cell.is_none() {
                out.push(Position::new(idx / self.size, idx % self.size));
            }
        }
        out
    }

    pub fn has_empty_cell(&self) -> bool {
        self.cells.iter().any(|c| c.is_none())
    }

    /// Iterate occupied cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.cells.iter().flatten()
    }

    pub fn find(&self, id: TileId) -> Option<Tile> {
        self.tiles().find(|t| t.id == id).copied()
    }

    pub fn has_tile_at_least(&self, value: u32) -> bool {
        self.tiles().any(|t| t.value >= value)
    }

    /// True if two edge-adjacent tiles hold the same value
    pub fn has_adjacent_match(&self) -> bool {
        self.tiles().any(|tile| {
            [Direction::Down, Direction::Right].iter().any(|dir| {
                tile.position
                    .step(dir.vector(), self.size)
                    .and_then(|p| self.tile(p))
                    .map_or(false, |other| other.value == tile.value)
            })
        })
    }

    /// Some move can still change the grid
    pub fn moves_available(&self) -> bool {
        self.has_empty_cell() || self.has_adjacent_match()
    }

    /// Row-major values, 0 for empty cells
    pub fn values(&self) -> Vec<u32> {
        self.cells
            .iter()
            .map(|c| c.map_or(0, |t| t.value))
            .collect()
    }

    /// Rebuild a grid from row-major values (0 = empty), minting a fresh id per tile.
    ///
    /// Returns `None` if `values` is not `size * size` long.
    pub fn from_values(
        size: usize,
        values: &[u32],
        mut next_id: impl FnMut() -> TileId,
    ) -> Option<Self> {
        if values.len() != size * size {
            return None;
        }
        let mut grid = Self::new(size);
        for (idx, &value) in values.iter().enumerate() {
            if value != 0 {
                let pos = Position::new(idx / size, idx % size);
                grid.insert(Tile::new(next_id(), value, pos));
            }
        }
        Some(grid)
    }

    /// Values of a single row, left to right
    pub fn row_values(&self, row: usize) -> Vec<u32> {
        (0..self.size)
            .map(|col| self.tile(Position::new(row, col)).map_or(0, |t| t.value))
            .collect()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileIds;

    fn grid_from(values: &[u32]) -> Grid {
        let size = (values.len() as f64).sqrt() as usize;
        let mut ids = TileIds::new();
        Grid::from_values(size, values, || ids.next_id()).unwrap()
    }

    #[test]
    fn test_grid_index_calculation() {
        let grid = Grid::new(4);
        assert_eq!(grid.index(Position::new(0, 0)), Some(0));
        assert_eq!(grid.index(Position::new(0, 3)), Some(3));
        assert_eq!(grid.index(Position::new(1, 0)), Some(4));
        assert_eq!(grid.index(Position::new(3, 3)), Some(15));
        assert_eq!(grid.index(Position::new(4, 0)), None);
        assert_eq!(grid.index(Position::new(0, 4)), None);
    }

    #[test]
    fn test_move_tile_updates_position() {
        let mut grid = grid_from(&[2, 0, 0, 0]);
        assert!(grid.move_tile(Position::new(0, 0), Position::new(1, 1)));
        let t = grid.tile(Position::new(1, 1)).unwrap();
        assert_eq!(t.position, Position::new(1, 1));
        assert!(grid.is_available(Position::new(0, 0)));
    }

    #[test]
    fn test_move_tile_refuses_occupied_target() {
        let mut grid = grid_from(&[2, 4, 0, 0]);
        assert!(!grid.move_tile(Position::new(0, 0), Position::new(0, 1)));
        assert_eq!(grid.values(), vec![2, 4, 0, 0]);
    }

    #[test]
    fn test_from_values_rejects_wrong_length() {
        let mut ids = TileIds::new();
        assert!(Grid::from_values(4, &[2, 2, 2], || ids.next_id()).is_none());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let grid = grid_from(&[2, 0, 0, 4]);
        let empty = grid.empty_cells();
        assert_eq!(
            empty.as_slice(),
            &[Position::new(0, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_adjacent_match_ignores_diagonals() {
        let diagonal = grid_from(&[2, 4, 4, 2]);
        assert!(!diagonal.has_adjacent_match());

        let vertical = grid_from(&[2, 4, 2, 8]);
        assert!(vertical.has_adjacent_match());

        let horizontal = grid_from(&[2, 2, 4, 8]);
        assert!(horizontal.has_adjacent_match());
    }
}
