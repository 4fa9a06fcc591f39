//! Engine configuration.
//!
//! All rule knobs have named defaults in `tui_2048_types`. `from_env` follows
//! the usual pattern: unset or unparseable variables fall back to defaults.

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_AD_UNDO_DELAY_MS, DEFAULT_FOUR_PROBABILITY, DEFAULT_GRID_SIZE,
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_WIN_VALUE, MAX_GRID_SIZE, MIN_GRID_SIZE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    /// Side length of the square grid
    pub size: usize,
    /// A tile of at least this value wins the game
    pub win_value: u32,
    /// Probability that a spawned tile is a 4
    pub four_probability: f64,
    /// Animation window after a move before win/loss is evaluated
    pub settle_delay_ms: u32,
    /// Interstitial duration before a rewarded undo is applied
    pub ad_undo_delay_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_GRID_SIZE,
            win_value: DEFAULT_WIN_VALUE,
            four_probability: DEFAULT_FOUR_PROBABILITY,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
            ad_undo_delay_ms: DEFAULT_AD_UNDO_DELAY_MS,
        }
    }
}

impl EngineConfig {
    /// Read overrides from `TUI2048_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
            raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
        }

        let d = Self::default();
        Self {
            size: parsed(lookup("TUI2048_SIZE"), d.size),
            win_value: parsed(lookup("TUI2048_WIN_VALUE"), d.win_value),
            four_probability: parsed(lookup("TUI2048_FOUR_PROBABILITY"), d.four_probability),
            settle_delay_ms: parsed(lookup("TUI2048_SETTLE_MS"), d.settle_delay_ms),
            ad_undo_delay_ms: parsed(lookup("TUI2048_AD_UNDO_MS"), d.ad_undo_delay_ms),
        }
    }

    /// Same rules, no animation window. Moves settle synchronously.
    pub fn instant() -> Self {
        Self {
            settle_delay_ms: 0,
            ad_undo_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_win_value(mut self, win_value: u32) -> Self {
        self.win_value = win_value;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&self.size) {
            return Err(ConfigError::SizeOutOfRange(self.size));
        }
        if self.win_value < 4 || !self.win_value.is_power_of_two() {
            return Err(ConfigError::WinValueNotPowerOfTwo(self.win_value));
        }
        if !(0.0..=1.0).contains(&self.four_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.four_probability));
        }
        Ok(())
    }
}
