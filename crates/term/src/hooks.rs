//! Terminal-side engine collaborators: bell sound and redraw flag.

use std::cell::Cell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::Result;

use crate::core::{GameSnapshot, RenderHook, SoundHook};
use crate::types::Sound;

/// Rings the terminal bell for errors and game over; other cues are silent.
pub struct BellSound<W: Write = io::Stdout> {
    out: W,
}

impl BellSound {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSound<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundHook for BellSound<W> {
    fn play(&mut self, sound: Sound) -> Result<()> {
        if matches!(sound, Sound::Error | Sound::GameOver) {
            self.out.write_all(b"\x07")?;
            self.out.flush()?;
        }
        Ok(())
    }
}

/// Shared "needs redraw" flag set by engine render notifications.
///
/// Starts set so the first frame is always drawn.
#[derive(Debug, Clone)]
pub struct RedrawFlag(Rc<Cell<bool>>);

impl Default for RedrawFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawFlag {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn mark(&self) {
        self.0.set(true);
    }

    /// Return the flag and reset it.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

impl RenderHook for RedrawFlag {
    fn moved(&mut self, _snapshot: &GameSnapshot) {
        self.mark();
    }

    fn settled(&mut self, _snapshot: &GameSnapshot) {
        self.mark();
    }
}
