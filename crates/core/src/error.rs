//! Engine error types.
//!
//! Every variant is local and recoverable: the engine state is unchanged when
//! one is returned.

use crate::types::{MAX_GRID_SIZE, MIN_GRID_SIZE};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("nothing to undo")]
    NoHistory,
    #[error("rewarded undo already pending")]
    UndoPending,
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("expected {expected} cell values, got {actual}")]
    GridShape { expected: usize, actual: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("grid size {0} outside {min}..={max}", min = MIN_GRID_SIZE, max = MAX_GRID_SIZE)]
    SizeOutOfRange(usize),
    #[error("win value {0} is not a power of two >= 4")]
    WinValueNotPowerOfTwo(u32),
    #[error("four probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(EngineError::NoHistory.to_string(), "nothing to undo");
        assert_eq!(
            EngineError::UndoPending.to_string(),
            "rewarded undo already pending"
        );
        assert_eq!(
            EngineError::InvalidDirection("north".into()).to_string(),
            "invalid direction: \"north\""
        );
        assert_eq!(
            EngineError::from(ConfigError::SizeOutOfRange(9)).to_string(),
            "invalid config: grid size 9 outside 2..=8"
        );
    }
}
