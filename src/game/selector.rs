//! Difficulty-dependent family selection
//!
//! Picks which family (by index into the hardest-first list) becomes the new
//! set of candidates. Index 0 is the hardest family, index 1 the runner-up.

use crate::core::Difficulty;
use tracing::trace;

/// Round-scoped selection policy
///
/// Holds the call counters the easy and medium policies cycle on. A fresh
/// selector is created for every round, so counters never leak between
/// rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultySelector {
    difficulty: Difficulty,
    easy_counter: u32,
    medium_counter: u32,
}

impl DifficultySelector {
    const EASY_START: u32 = 0;
    const MEDIUM_START: u32 = 1;
    const MEDIUM_PERIOD: u32 = 4;

    /// A selector with counters at their starting values
    #[must_use]
    pub const fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            easy_counter: Self::EASY_START,
            medium_counter: Self::MEDIUM_START,
        }
    }

    /// The difficulty this selector applies
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Current easy-policy counter
    #[must_use]
    pub const fn easy_counter(&self) -> u32 {
        self.easy_counter
    }

    /// Current medium-policy counter
    #[must_use]
    pub const fn medium_counter(&self) -> u32 {
        self.medium_counter
    }

    /// Choose a family index for a list of `num_families` families
    ///
    /// - Hard: always 0.
    /// - Easy: 0 on even counter values, 1 on odd ones.
    /// - Medium: 1 when the counter is a multiple of four, otherwise 0.
    ///
    /// The runner-up is only chosen when at least two families exist. The
    /// easy and medium counters advance on every call.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    /// use evil_hangman::game::DifficultySelector;
    ///
    /// let mut easy = DifficultySelector::new(Difficulty::Easy);
    /// let picks: Vec<usize> = (0..4).map(|_| easy.select_index(3)).collect();
    /// assert_eq!(picks, vec![0, 1, 0, 1]);
    /// ```
    pub fn select_index(&mut self, num_families: usize) -> usize {
        let wants_runner_up = match self.difficulty {
            Difficulty::Hard => false,
            Difficulty::Easy => {
                let odd = self.easy_counter % 2 == 1;
                self.easy_counter += 1;
                odd
            }
            Difficulty::Medium => {
                let due = self.medium_counter % Self::MEDIUM_PERIOD == 0;
                self.medium_counter += 1;
                due
            }
        };

        let index = usize::from(wants_runner_up && num_families >= 2);

        trace!(
            difficulty = %self.difficulty,
            num_families,
            index,
            easy_counter = self.easy_counter,
            medium_counter = self.medium_counter,
            "family selected"
        );

        index
    }
}
