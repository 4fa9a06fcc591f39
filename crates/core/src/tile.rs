//! Tile module - numbered pieces and their identities.

use crate::types::Position;

/// Identity of a tile.
///
/// A merge produces a tile with a fresh id, so the two sources and the
/// product are always distinguishable within a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

/// A single numbered piece occupying one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: TileId,
    pub value: u32,
    pub position: Position,
}

impl Tile {
    pub fn new(id: TileId, value: u32, position: Position) -> Self {
        Self {
            id,
            value,
            position,
        }
    }
}

/// Monotonic source of [`TileId`]s.
#[derive(Debug, Clone, Default)]
pub struct TileIds {
    next: u32,
}

impl TileIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> TileId {
        let id = TileId(self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}
