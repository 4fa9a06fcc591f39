use crate::types::{Position, DEFAULT_GRID_SIZE};

/// Game phase derived from the `won` / `keep_playing` / `game_over` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Active,
    /// Win tile reached, victory screen up; moves are rejected
    Won,
    /// Win tile reached and the player chose to keep going
    Continuing,
    GameOver,
}

impl Phase {
    pub fn from_flags(won: bool, keep_playing: bool, game_over: bool) -> Self {
        if game_over {
            Phase::GameOver
        } else if won && !keep_playing {
            Phase::Won
        } else if won {
            Phase::Continuing
        } else {
            Phase::Active
        }
    }

    pub fn accepts_moves(&self) -> bool {
        matches!(self, Phase::Active | Phase::Continuing)
    }
}

/// Render-facing view of one tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileView {
    pub id: u32,
    pub value: u32,
    pub position: Position,
    /// Where the tile sat before the last move, if it existed then
    pub previous_position: Option<Position>,
    /// Produced by a merge during the last move
    pub merged: bool,
    /// Spawned after the last move
    pub spawned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub size: usize,
    /// Row-major values, 0 for empty cells
    pub values: Vec<u32>,
    pub tiles: Vec<TileView>,
    pub score: u32,
    pub best: u32,
    /// Successful moves this game
    pub moves: u32,
    pub won: bool,
    pub keep_playing: bool,
    pub game_over: bool,
    pub busy: bool,
    pub can_undo: bool,
    pub ad_pending: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.values.clear();
        self.values.resize(self.size * self.size, 0);
        self.tiles.clear();
        self.score = 0;
        self.best = 0;
        self.moves = 0;
        self.won = false;
        self.keep_playing = false;
        self.game_over = false;
        self.busy = false;
        self.can_undo = false;
        self.ad_pending = false;
        self.phase = Phase::Active;
    }

    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        if row >= self.size || col >= self.size {
            return 0;
        }
        self.values[row * self.size + col]
    }

    pub fn tile_at(&self, row: usize, col: usize) -> Option<&TileView> {
        let pos = Position::new(row, col);
        self.tiles.iter().find(|t| t.position == pos)
    }

    pub fn playable(&self) -> bool {
        self.phase.accepts_moves() && !self.busy
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            size: DEFAULT_GRID_SIZE,
            values: Vec::new(),
            tiles: Vec::new(),
            score: 0,
            best: 0,
            moves: 0,
            won: false,
            keep_playing: false,
            game_over: false,
            busy: false,
            can_undo: false,
            ad_pending: false,
            phase: Phase::Active,
        };
        s.clear();
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_follows_flags() {
        assert_eq!(Phase::from_flags(false, false, false), Phase::Active);
        assert_eq!(Phase::from_flags(true, false, false), Phase::Won);
        assert_eq!(Phase::from_flags(true, true, false), Phase::Continuing);
        assert_eq!(Phase::from_flags(true, true, true), Phase::GameOver);
        assert!(!Phase::Won.accepts_moves());
        assert!(Phase::Continuing.accepts_moves());
    }

    #[test]
    fn default_snapshot_is_empty_grid() {
        let snap = GameSnapshot::default();
        assert_eq!(snap.values.len(), 16);
        assert!(snap.values.iter().all(|&v| v == 0));
        assert_eq!(snap.value_at(9, 9), 0);
        assert!(snap.playable());
    }
}
