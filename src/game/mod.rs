//! The adversarial host
//!
//! Partitioning candidates into word families, choosing a family by
//! difficulty, and the round state that ties both together.

mod manager;
mod partition;
mod round;
mod selector;

pub use manager::HangmanManager;
pub use partition::{WordFamily, family_sizes, partition};
pub use round::{FamilySizes, RoundState};
pub use selector::DifficultySelector;
