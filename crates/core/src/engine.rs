//! Game engine - owns the grid, score and phase flags
//!
//! This module ties together all core pieces: grid, traversal, annotations,
//! history and the injected collaborators. It implements the move algorithm
//! (shift + merge + refill), the settle window, win/loss detection and undo.

use tracing::{debug, info, warn};

use crate::annotations::MoveAnnotations;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::grid::Grid;
use crate::history::{HistorySnapshot, UndoSlot};
use crate::hooks::Collaborators;
use crate::snapshot::{GameSnapshot, Phase, TileView};
use crate::tile::{Tile, TileIds};
use crate::traversal::traversal;
use crate::types::{Direction, GameAction, GameEvent, Position, Sound, Vector};

/// Complete game state plus its collaborators
#[derive(Debug)]
pub struct GameEngine {
    config: EngineConfig,
    grid: Grid,
    ids: TileIds,
    annotations: MoveAnnotations,
    history: UndoSlot,
    score: u32,
    best_score: u32,
    /// Successful moves this game.
    moves: u32,
    game_over: bool,
    won: bool,
    keep_playing: bool,
    /// Remaining settle window. `Some` while a move is in progress.
    settle_timer_ms: Option<u32>,
    /// Remaining interstitial before a rewarded undo applies.
    ad_timer_ms: Option<u32>,
    hooks: Collaborators,
}

impl GameEngine {
    /// Build an engine, load the best score and deal the opening two tiles.
    pub fn new(config: EngineConfig, mut hooks: Collaborators) -> Result<Self, EngineError> {
        config.validate()?;

        let best_score = match hooks.best_score.load() {
            Ok(best) => best,
            Err(err) => {
                warn!(%err, "best score unavailable, starting from 0");
                0
            }
        };

        let mut engine = Self {
            grid: Grid::new(config.size),
            config,
            ids: TileIds::new(),
            annotations: MoveAnnotations::new(),
            history: UndoSlot::new(),
            score: 0,
            best_score,
            moves: 0,
            game_over: false,
            won: false,
            keep_playing: false,
            settle_timer_ms: None,
            ad_timer_ms: None,
            hooks,
        };
        engine.initialize();
        Ok(engine)
    }

    /// Reset grid, score, flags and history, then place two random tiles.
    pub fn initialize(&mut self) {
        self.grid = Grid::new(self.config.size);
        self.annotations.clear();
        self.history.clear();
        self.score = 0;
        self.moves = 0;
        self.game_over = false;
        self.won = false;
        self.keep_playing = false;
        self.settle_timer_ms = None;
        self.ad_timer_ms = None;

        self.place_random_tile();
        self.place_random_tile();
        self.notify_moved();
    }

    /// Start over and announce it.
    pub fn new_game(&mut self) {
        self.initialize();
        info!(best = self.best_score, "new game");
        self.emit(GameEvent::NewGame {
            best: self.best_score,
        });
    }

    /// Replace the board with row-major `values` (0 = empty) and `score`.
    ///
    /// Flags, history and annotations are reset. Used for replays and tests.
    pub fn load_values(&mut self, values: &[u32], score: u32) -> Result<(), EngineError> {
        let size = self.grid.size();
        let ids = &mut self.ids;
        let grid = Grid::from_values(size, values, || ids.next_id()).ok_or(
            EngineError::GridShape {
                expected: size * size,
                actual: values.len(),
            },
        )?;

        self.grid = grid;
        self.score = score;
        self.moves = 0;
        self.annotations.clear();
        self.history.clear();
        self.game_over = false;
        self.won = false;
        self.keep_playing = false;
        self.settle_timer_ms = None;
        self.ad_timer_ms = None;
        Ok(())
    }

    /// Spawn a 2 (or, rarely, a 4) in a uniformly chosen empty cell.
    ///
    /// No-op on a full grid.
    pub fn place_random_tile(&mut self) -> Option<Tile> {
        let empty = self.grid.empty_cells();
        if empty.is_empty() {
            return None;
        }

        let idx = pick_index(self.hooks.random.next_f64(), empty.len());
        let value = if self.hooks.random.next_f64() < self.config.four_probability {
            4
        } else {
            2
        };

        let tile = Tile::new(self.ids.next_id(), value, empty[idx]);
        self.grid.insert(tile);
        self.annotations.record_spawn(tile.id);
        Some(tile)
    }

    /// Push every tile toward `direction`.
    ///
    /// Returns whether the grid changed. A rejected or ineffective move leaves
    /// grid, score and history untouched and spawns nothing.
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        if !self.accepts_moves() {
            debug!(
                direction = direction.as_str(),
                phase = ?self.phase(),
                busy = self.is_busy(),
                "move rejected"
            );
            return false;
        }

        let before = HistorySnapshot::capture(&self.grid, self.score);
        self.annotations.begin_move(&self.grid);

        let vector = direction.vector();
        let order = traversal(self.grid.size(), vector);
        let mut moved = false;

        for cell in order.positions() {
            let Some(tile) = self.grid.tile(cell) else {
                continue;
            };

            let (farthest, next) = self.find_farthest_position(cell, vector);

            if let Some(blocker) = next.and_then(|p| self.grid.tile(p)) {
                // Only one merge per tile per move
                if blocker.value == tile.value && !self.annotations.is_merge_product(blocker.id) {
                    self.merge(tile, blocker);
                    moved = true;
                    continue;
                }
            }

            if farthest != cell && self.grid.move_tile(cell, farthest) {
                moved = true;
            }
        }

        if !moved {
            if !self.game_over && !self.grid.moves_available() {
                self.declare_game_over();
            }
            debug!(direction = direction.as_str(), "nothing moved");
            return false;
        }

        self.history.commit(before);
        self.moves = self.moves.wrapping_add(1);
        self.play(Sound::Slide);
        self.place_random_tile();
        debug!(
            direction = direction.as_str(),
            score = self.score,
            merges = self.annotations.merge_count(),
            "moved"
        );
        self.emit(GameEvent::Move {
            direction,
            score: self.score,
        });
        self.notify_moved();

        self.settle_timer_ms = Some(self.config.settle_delay_ms);
        if self.config.settle_delay_ms == 0 {
            self.settle();
        }
        true
    }

    /// Parse `name` as a direction and move.
    pub fn attempt_named_move(&mut self, name: &str) -> Result<bool, EngineError> {
        let direction = Direction::from_str(name)
            .ok_or_else(|| EngineError::InvalidDirection(name.to_string()))?;
        Ok(self.attempt_move(direction))
    }

    /// Walk from `cell` along `vector` over empty cells.
    ///
    /// Returns the last empty cell reached (or `cell` itself) and the first
    /// in-bounds cell beyond it, which is necessarily occupied.
    fn find_farthest_position(
        &self,
        cell: Position,
        vector: Vector,
    ) -> (Position, Option<Position>) {
        let size = self.grid.size();
        let mut previous = cell;
        loop {
            match previous.step(vector, size) {
                Some(next) if self.grid.is_available(next) => previous = next,
                next => return (previous, next),
            }
        }
    }

    fn merge(&mut self, moving: Tile, blocker: Tile) {
        let value = moving.value.saturating_mul(2);
        let product = Tile::new(self.ids.next_id(), value, blocker.position);

        self.grid.remove(moving.position);
        self.grid.remove(blocker.position);
        self.grid.insert(product);
        self.annotations.record_merge(product.id, [moving, blocker]);

        self.score = self.score.saturating_add(value);
        self.play(Sound::Merge);
        self.emit(GameEvent::Merge {
            value,
            score: self.score,
        });
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Returns true if the settle window closed or a deferred undo ran.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut fired = false;

        if let Some(remaining) = self.settle_timer_ms {
            let left = remaining.saturating_sub(elapsed_ms);
            if left == 0 {
                self.settle();
                fired = true;
            } else {
                self.settle_timer_ms = Some(left);
            }
        }

        if let Some(remaining) = self.ad_timer_ms {
            let left = remaining.saturating_sub(elapsed_ms);
            if left == 0 {
                self.ad_timer_ms = None;
                if let Err(err) = self.undo() {
                    debug!(%err, "rewarded undo found nothing to restore");
                }
                fired = true;
            } else {
                self.ad_timer_ms = Some(left);
            }
        }

        fired
    }

    /// Close the settle window: persist the best score, then run the terminal check.
    fn settle(&mut self) {
        self.settle_timer_ms = None;

        if self.score > self.best_score {
            self.best_score = self.score;
            if let Err(err) = self.hooks.best_score.save(self.best_score) {
                warn!(%err, best = self.best_score, "failed to save best score");
            }
        }

        self.check_terminal();

        let snap = self.snapshot();
        self.hooks.render.settled(&snap);
    }

    fn check_terminal(&mut self) {
        if !self.won && self.grid.has_tile_at_least(self.config.win_value) {
            self.won = true;
            info!(score = self.score, "win tile reached");
            if !self.keep_playing {
                self.emit(GameEvent::Victory { score: self.score });
            }
            return;
        }

        if !self.grid.moves_available() {
            self.declare_game_over();
        }
    }

    fn declare_game_over(&mut self) {
        self.game_over = true;
        info!(score = self.score, best = self.best_score, "game over");
        self.play(Sound::GameOver);
        self.emit(GameEvent::GameOver {
            score: self.score,
            best: self.best_score,
        });
    }

    /// Restore grid values and score from before the last move.
    ///
    /// At most one undo per move. `won` and `keep_playing` stay as they are.
    /// Rejected without side effects while a rewarded undo is pending; the
    /// pending undo restores the snapshot when its timer runs out.
    pub fn undo(&mut self) -> Result<(), EngineError> {
        if self.ad_timer_ms.is_some() {
            debug!("undo rejected, rewarded undo pending");
            return Err(EngineError::UndoPending);
        }
        let Some(snapshot) = self.history.take() else {
            self.play(Sound::Error);
            return Err(EngineError::NoHistory);
        };

        let size = self.grid.size();
        let ids = &mut self.ids;
        let Some(grid) = Grid::from_values(size, &snapshot.values, || ids.next_id()) else {
            self.play(Sound::Error);
            return Err(EngineError::GridShape {
                expected: size * size,
                actual: snapshot.values.len(),
            });
        };

        self.grid = grid;
        self.score = snapshot.score;
        self.game_over = false;
        self.annotations.clear();

        debug!(score = self.score, "undo");
        self.play(Sound::Undo);
        self.emit(GameEvent::Undo { score: self.score });
        self.notify_moved();
        Ok(())
    }

    /// Show an interstitial, then undo once it has run for `ad_undo_delay_ms`.
    ///
    /// Moves are rejected while the interstitial is up. A second request
    /// while one is pending is ignored.
    pub fn undo_with_ad(&mut self) -> Result<(), EngineError> {
        if self.ad_timer_ms.is_some() {
            return Ok(());
        }
        if self.history.is_empty() {
            self.play(Sound::Error);
            return Err(EngineError::NoHistory);
        }

        self.emit(GameEvent::AdView {
            ad_type: "interstitial".to_string(),
        });

        if self.config.ad_undo_delay_ms == 0 {
            return self.undo();
        }
        self.ad_timer_ms = Some(self.config.ad_undo_delay_ms);
        Ok(())
    }

    /// Dismiss the victory screen and keep going.
    ///
    /// Returns false unless the game is in the `Won` phase.
    pub fn keep_playing(&mut self) -> bool {
        if self.phase() != Phase::Won {
            return false;
        }
        self.keep_playing = true;
        info!(score = self.score, "continuing past win");
        true
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.attempt_move(direction),
            GameAction::Undo => self.undo().is_ok(),
            GameAction::RewardedUndo => self.undo_with_ad().is_ok(),
            GameAction::NewGame => {
                self.new_game();
                true
            }
            GameAction::KeepPlaying => self.keep_playing(),
        }
    }

    fn accepts_moves(&self) -> bool {
        self.phase().accepts_moves() && !self.is_busy() && self.ad_timer_ms.is_none()
    }

    fn play(&mut self, sound: Sound) {
        if let Err(err) = self.hooks.sound.play(sound) {
            warn!(sound = sound.as_str(), %err, "sound hook failed");
        }
    }

    fn emit(&mut self, event: GameEvent) {
        if let Err(err) = self.hooks.events.emit(&event) {
            warn!(event = event.name(), %err, "event sink failed");
        }
    }

    fn notify_moved(&mut self) {
        let snap = self.snapshot();
        self.hooks.render.moved(&snap);
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn annotations(&self) -> &MoveAnnotations {
        &self.annotations
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn keep_playing_enabled(&self) -> bool {
        self.keep_playing
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// A move is in its settle window
    pub fn is_busy(&self) -> bool {
        self.settle_timer_ms.is_some()
    }

    pub fn ad_pending(&self) -> bool {
        self.ad_timer_ms.is_some()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn history(&self) -> Option<&HistorySnapshot> {
        self.history.peek()
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.won, self.keep_playing, self.game_over)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.size = self.grid.size();
        out.values.clear();
        out.values
            .extend(self.grid.cells().iter().map(|c| c.map_or(0, |t| t.value)));

        out.tiles.clear();
        let spawned = self.annotations.spawned();
        out.tiles.extend(self.grid.tiles().map(|t| TileView {
            id: t.id.0,
            value: t.value,
            position: t.position,
            previous_position: self.annotations.previous_position(t.id),
            merged: self.annotations.is_merge_product(t.id),
            spawned: spawned == Some(t.id),
        }));

        out.score = self.score;
        out.best = self.best_score;
        out.moves = self.moves;
        out.won = self.won;
        out.keep_playing = self.keep_playing;
        out.game_over = self.game_over;
        out.busy = self.is_busy();
        out.can_undo = self.can_undo();
        out.ad_pending = self.ad_pending();
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

/// Map a `[0, 1)` draw onto `0..len`
fn pick_index(draw: f64, len: usize) -> usize {
    ((draw * len as f64) as usize).min(len.saturating_sub(1))
}
