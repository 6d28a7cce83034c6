//! Core domain types for hangman
//!
//! Words, reveal patterns and the difficulty tag. Pure values with no game state.

mod difficulty;
mod pattern;
mod word;

pub use difficulty::Difficulty;
pub use pattern::Pattern;
pub use word::{Word, WordError};
