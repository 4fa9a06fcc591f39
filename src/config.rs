//! Runner configuration from `TUI2048_*` environment variables.

use std::path::PathBuf;

use crate::core::EngineConfig;

/// Default best-score file name, placed in `$HOME`.
pub const BEST_SCORE_FILE: &str = ".tui2048_best.json";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Best-score JSON file. `None` keeps the best score in memory only.
    pub best_path: Option<PathBuf>,
    /// Log file. `None` disables logging.
    pub log_path: Option<PathBuf>,
    /// Fixed RNG seed; entropy when unset.
    pub seed: Option<u64>,
    /// Capture the mouse for swipe input
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            best_path: None,
            log_path: None,
            seed: None,
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// `TUI2048_BEST_PATH` set to an empty string disables the best-score file.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let engine = EngineConfig::from_lookup(&lookup);

        let best_path = match lookup("TUI2048_BEST_PATH") {
            Some(raw) => non_empty(raw).map(PathBuf::from),
            None => lookup("HOME")
                .and_then(non_empty)
                .map(|home| PathBuf::from(home).join(BEST_SCORE_FILE)),
        };

        let log_path = lookup("TUI2048_LOG_PATH")
            .and_then(non_empty)
            .map(PathBuf::from);

        let seed = lookup("TUI2048_SEED").and_then(|s| s.trim().parse().ok());

        let mouse = lookup("TUI2048_MOUSE")
            .map(|s| !matches!(s.trim(), "0" | "false" | "off"))
            .unwrap_or(true);

        Self {
            engine,
            best_path,
            log_path,
            seed,
            mouse,
        }
    }
}

fn non_empty(raw: String) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
