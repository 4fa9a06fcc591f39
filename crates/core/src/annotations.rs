//! Per-move annotations keyed by tile identity.
//!
//! Animation bookkeeping (where a tile came from, which two tiles a merge
//! consumed, which tile was spawned) lives here instead of on [`Tile`].
//! The table is cleared at the start of every move. The merge rule reads it
//! too: a tile listed as a merge product cannot merge again in the same move.

use std::collections::HashMap;

use crate::grid::Grid;
use crate::tile::{Tile, TileId};
use crate::types::Position;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveAnnotations {
    previous: HashMap<TileId, Position>,
    merged_from: HashMap<TileId, [Tile; 2]>,
    spawned: Option<TileId>,
}

impl MoveAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.previous.clear();
        self.merged_from.clear();
        self.spawned = None;
    }

    /// Forget the previous move and remember where every tile starts this one
    pub fn begin_move(&mut self, grid: &Grid) {
        self.clear();
        for tile in grid.tiles() {
            self.previous.insert(tile.id, tile.position);
        }
    }

    pub fn record_merge(&mut self, product: TileId, sources: [Tile; 2]) {
        self.merged_from.insert(product, sources);
    }

    pub fn record_spawn(&mut self, id: TileId) {
        self.spawned = Some(id);
    }

    pub fn is_merge_product(&self, id: TileId) -> bool {
        self.merged_from.contains_key(&id)
    }

    pub fn previous_position(&self, id: TileId) -> Option<Position> {
        self.previous.get(&id).copied()
    }

    pub fn merged_from(&self, id: TileId) -> Option<&[Tile; 2]> {
        self.merged_from.get(&id)
    }

    pub fn spawned(&self) -> Option<TileId> {
        self.spawned
    }

    pub fn merge_count(&self) -> usize {
        self.merged_from.len()
    }
}
