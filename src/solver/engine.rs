//! Automated guesser

use super::strategy::Strategy;
use crate::core::{Pattern, Word};
use std::collections::BTreeSet;

/// Automated hangman guesser
///
/// Sees only what a human player sees: the public dictionary, the pattern and
/// the letters guessed so far. Candidates are reconstructed from those.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    words: &'a [Word],
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver over the words of one length
    pub const fn new(strategy: S, words: &'a [Word]) -> Self {
        Self { strategy, words }
    }

    /// Get the next letter to guess
    ///
    /// Returns `None` if no consistent word has an unguessed letter left.
    pub fn next_letter(&self, pattern: &Pattern, guessed: &BTreeSet<char>) -> Option<char> {
        let candidates = self.filter_candidates(pattern, guessed);
        self.strategy.select_letter(&candidates, guessed)
    }

    /// Words still consistent with the pattern and guessed letters
    pub fn filter_candidates(&self, pattern: &Pattern, guessed: &BTreeSet<char>) -> Vec<&'a Word> {
        self.words
            .iter()
            .filter(|word| pattern.admits(word, guessed))
            .collect()
    }

    /// Count how many words remain consistent
    pub fn count_candidates(&self, pattern: &Pattern, guessed: &BTreeSet<char>) -> usize {
        self.words
            .iter()
            .filter(|word| pattern.admits(word, guessed))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::dictionary::Dictionary;
    use crate::game::RoundState;
    use crate::solver::strategy::FrequencyStrategy;

    fn setup_words() -> Vec<Word> {
        ["cat", "cap", "car", "dog", "dot", "bib"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect()
    }

    #[test]
    fn filter_matches_host_candidates() {
        let dictionary = Dictionary::new(["cat", "cap", "car", "dog", "dot", "bib"]).unwrap();
        let words = dictionary.filter_by_length(3);
        let solver = Solver::new(FrequencyStrategy, &words);

        let mut round = RoundState::new(&dictionary, 3, 6, Difficulty::Hard).unwrap();
        for letter in ['a', 'o', 't'] {
            round.make_guess(letter).unwrap();

            let guessed: BTreeSet<char> = round.sorted_guessed_letters().into_iter().collect();
            let mut reconstructed: Vec<&Word> = solver.filter_candidates(round.pattern(), &guessed);
            reconstructed.sort();
            let mut actual: Vec<&Word> = round.candidates().iter().collect();
            actual.sort();
            assert_eq!(reconstructed, actual);
        }
    }

    #[test]
    fn next_letter_skips_guessed() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let guessed: BTreeSet<char> = ['a'].into_iter().collect();

        let letter = solver
            .next_letter(&Pattern::unrevealed(3), &guessed)
            .unwrap();
        assert_ne!(letter, 'a');
    }

    #[test]
    fn count_candidates_decreases() {
        let words = setup_words();
        let solver = Solver::new(FrequencyStrategy, &words);
        let start = Pattern::unrevealed(3);

        assert_eq!(solver.count_candidates(&start, &BTreeSet::new()), 6);

        let guessed: BTreeSet<char> = ['a'].into_iter().collect();
        assert_eq!(solver.count_candidates(&start, &guessed), 3);
    }
}
