//! Best-score persistence.
//!
//! [`JsonFileBestScore`] keeps a tiny JSON record on disk
//! (`{"best_score": 2048}`); [`MemoryBestScore`] is for tests and for
//! runs without a usable home directory. Both implement the engine's [`BestScoreStore`] seam.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use tui_2048_core as core;

use crate::core::BestScoreStore;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("best score file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("best score file {} is not valid JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub best_score: u32,
}

/// Best score stored as JSON at a fixed path.
///
/// A missing file reads as 0. Saves go through a sibling temp file and a
/// rename so a crash never leaves a truncated record.
#[derive(Debug, Clone)]
pub struct JsonFileBestScore {
    path: PathBuf,
}

impl JsonFileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<u32, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no best score file yet");
                return Ok(0);
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let record: BestScoreRecord =
            serde_json::from_str(&raw).map_err(|source| StoreError::Json {
                path: self.path.clone(),
                source,
            })?;
        Ok(record.best_score)
    }

    pub fn write(&self, best_score: u32) -> Result<(), StoreError> {
        let io_err = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let json = serde_json::to_string(&BestScoreRecord { best_score }).map_err(|source| {
            StoreError::Json {
                path: self.path.clone(),
                source,
            }
        })?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!(path = %self.path.display(), best_score, "best score saved");
        Ok(())
    }
}

impl BestScoreStore for JsonFileBestScore {
    fn load(&mut self) -> anyhow::Result<u32> {
        Ok(self.read()?)
    }

    fn save(&mut self, best: u32) -> anyhow::Result<()> {
        Ok(self.write(best)?)
    }
}

/// In-memory best score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    best: u32,
    saves: u32,
}

impl MemoryBestScore {
    pub fn new(best: u32) -> Self {
        Self { best, saves: 0 }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Number of successful saves
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&mut self) -> anyhow::Result<u32> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> anyhow::Result<()> {
        self.best = best;
        self.saves += 1;
        Ok(())
    }
}
