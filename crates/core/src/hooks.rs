//! Collaborator seams.
//!
//! The engine never touches storage, audio, analytics or the screen directly.
//! It calls these traits, and swallows (logs) any error they return so a
//! failing collaborator can never change game state.

use anyhow::Result;

use crate::rng::RandomSource;
use crate::snapshot::GameSnapshot;
use crate::types::{GameEvent, Sound};

/// Persistent best score.
pub trait BestScoreStore {
    fn load(&mut self) -> Result<u32>;
    fn save(&mut self, best: u32) -> Result<()>;
}

/// Fire-and-forget analytics.
pub trait EventSink {
    fn emit(&mut self, event: &GameEvent) -> Result<()>;
}

/// Audio cues. Implementations must not assume audio is available.
pub trait SoundHook {
    fn play(&mut self, sound: Sound) -> Result<()>;
}

/// Animation/render notifications.
pub trait RenderHook {
    /// Grid changed (move, spawn, undo). Snapshot carries previous positions
    /// and merge provenance for animating the change.
    fn moved(&mut self, snapshot: &GameSnapshot);
    /// Settle window elapsed and the terminal check ran.
    fn settled(&mut self, snapshot: &GameSnapshot);
}

/// Keeps no best score.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBestScore;

impl BestScoreStore for NullBestScore {
    fn load(&mut self) -> Result<u32> {
        Ok(0)
    }

    fn save(&mut self, _best: u32) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn emit(&mut self, _event: &GameEvent) -> Result<()> {
        Ok(())
    }
}

/// Writes every event as a JSON payload to the `analytics` log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogEventSink;

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GameEvent) -> Result<()> {
        let payload = serde_json::to_string(event)?;
        tracing::info!(target: "analytics", event = event.name(), %payload);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSound;

impl SoundHook for SilentSound {
    fn play(&mut self, _sound: Sound) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoRender;

impl RenderHook for NoRender {
    fn moved(&mut self, _snapshot: &GameSnapshot) {}
    fn settled(&mut self, _snapshot: &GameSnapshot) {}
}

/// Everything the engine consumes from the outside world.
pub struct Collaborators {
    pub random: Box<dyn RandomSource>,
    pub best_score: Box<dyn BestScoreStore>,
    pub events: Box<dyn EventSink>,
    pub sound: Box<dyn SoundHook>,
    pub render: Box<dyn RenderHook>,
}

impl Collaborators {
    /// Only a random source; every other collaborator is a no-op.
    pub fn new(random: impl RandomSource + 'static) -> Self {
        Self {
            random: Box::new(random),
            best_score: Box::new(NullBestScore),
            events: Box::new(NullEventSink),
            sound: Box::new(SilentSound),
            render: Box::new(NoRender),
        }
    }

    pub fn with_best_score(mut self, store: impl BestScoreStore + 'static) -> Self {
        self.best_score = Box::new(store);
        self
    }

    pub fn with_events(mut self, sink: impl EventSink + 'static) -> Self {
        self.events = Box::new(sink);
        self
    }

    pub fn with_sound(mut self, sound: impl SoundHook + 'static) -> Self {
        self.sound = Box::new(sound);
        self
    }

    pub fn with_render(mut self, render: impl RenderHook + 'static) -> Self {
        self.render = Box::new(render);
        self
    }
}

impl std::fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}
