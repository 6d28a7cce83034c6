//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Word;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick an unguessed letter given the words still possible
    ///
    /// Returns `None` if no candidate holds an unguessed letter.
    fn select_letter(&self, candidates: &[&Word], guessed: &BTreeSet<char>) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most widespread letter among the candidates (default)
    Frequency(FrequencyStrategy),
    /// Any letter that appears in some candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_letter(&self, candidates: &[&Word], guessed: &BTreeSet<char>) -> Option<char> {
        match self {
            Self::Frequency(s) => s.select_letter(candidates, guessed),
            Self::Random(s) => s.select_letter(candidates, guessed),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Display name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

/// Count, for every unguessed letter, how many candidates contain it
fn letter_coverage(candidates: &[&Word], guessed: &BTreeSet<char>) -> FxHashMap<char, usize> {
    let mut counts: FxHashMap<char, usize> = FxHashMap::default();

    for candidate in candidates {
        for letter in candidate.distinct_letters() {
            if !guessed.contains(&letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    counts
}

/// Letter-coverage strategy
///
/// Guesses the letter contained in the most candidates, which is the letter
/// most likely to be a hit. Ties go to the alphabetically first letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_letter(&self, candidates: &[&Word], guessed: &BTreeSet<char>) -> Option<char> {
        letter_coverage(candidates, guessed)
            .into_iter()
            .max_by(|(a_letter, a_count), (b_letter, b_count)| {
                a_count.cmp(b_count).then_with(|| b_letter.cmp(a_letter))
            })
            .map(|(letter, _)| letter)
    }
}

/// Random strategy
///
/// Picks uniformly among the unguessed letters that appear in some candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_letter(&self, candidates: &[&Word], guessed: &BTreeSet<char>) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let mut letters: Vec<char> = letter_coverage(candidates, guessed).into_keys().collect();
        letters.sort_unstable();
        letters.choose(&mut rand::rng()).copied()
    }
}
