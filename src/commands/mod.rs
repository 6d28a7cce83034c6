//! Command implementations

pub mod replay;
pub mod simple;
pub mod simulate;
pub mod stats;

pub use replay::{ReplayResult, ReplayStep, replay_letters};
pub use simple::run_simple;
pub use simulate::{GameRecord, SimulateConfig, SimulationResult, play_automated, run_simulation};
pub use stats::{DictionaryStats, dictionary_stats};

use crate::core::Difficulty;

/// Parameters shared by every command that starts a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub word_length: usize,
    pub max_wrong_guesses: u32,
    pub difficulty: Difficulty,
}

impl RoundConfig {
    #[must_use]
    pub const fn new(word_length: usize, max_wrong_guesses: u32, difficulty: Difficulty) -> Self {
        Self {
            word_length,
            max_wrong_guesses,
            difficulty,
        }
    }
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self::new(5, 8, Difficulty::Hard)
    }
}
