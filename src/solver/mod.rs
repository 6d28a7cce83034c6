//! Automated guessers
//!
//! Play against the host using only the information a human player has.

mod engine;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
