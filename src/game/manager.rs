//! Library entry point: a dictionary plus at most one active round

use super::round::{FamilySizes, RoundState};
use crate::core::{Difficulty, Word};
use crate::dictionary::Dictionary;
use crate::error::HangmanError;

/// Owns the dictionary and the current round
///
/// Starting a new round replaces the previous one. Only one round is ever
/// active per manager.
#[derive(Debug, Clone)]
pub struct HangmanManager {
    dictionary: Dictionary,
    round: Option<RoundState>,
}

impl HangmanManager {
    /// Create a manager over a word collection
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if the collection has no words.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::HangmanManager;
    /// use evil_hangman::core::Difficulty;
    ///
    /// let mut manager = HangmanManager::new(["cat", "cap", "car", "dog"]).unwrap();
    /// assert_eq!(manager.count_by_length(3), 4);
    ///
    /// manager.start_round(3, 5, Difficulty::Hard).unwrap();
    /// manager.make_guess('a').unwrap();
    /// assert_eq!(manager.round().unwrap().current_pattern(), "-a-");
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::with_dictionary(Dictionary::new(words)?))
    }

    /// Create a manager over an already built dictionary
    #[must_use]
    pub const fn with_dictionary(dictionary: Dictionary) -> Self {
        Self {
            dictionary,
            round: None,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Number of dictionary words of exactly `length` letters
    #[must_use]
    pub fn count_by_length(&self, length: usize) -> usize {
        self.dictionary.count_by_length(length)
    }

    /// Start a fresh round, replacing any previous one
    ///
    /// On error the previous round, if any, stays active.
    ///
    /// # Errors
    /// See [`RoundState::new`].
    pub fn start_round(
        &mut self,
        word_length: usize,
        max_wrong_guesses: u32,
        difficulty: Difficulty,
    ) -> Result<&mut RoundState, HangmanError> {
        let round = RoundState::new(&self.dictionary, word_length, max_wrong_guesses, difficulty)?;
        Ok(self.round.insert(round))
    }

    /// The active round
    ///
    /// # Errors
    /// Returns `HangmanError::NoActiveRound` before the first round starts.
    pub fn round(&self) -> Result<&RoundState, HangmanError> {
        self.round.as_ref().ok_or(HangmanError::NoActiveRound)
    }

    /// The active round, mutably
    ///
    /// # Errors
    /// Returns `HangmanError::NoActiveRound` before the first round starts.
    pub fn round_mut(&mut self) -> Result<&mut RoundState, HangmanError> {
        self.round.as_mut().ok_or(HangmanError::NoActiveRound)
    }

    /// Guess a letter in the active round
    ///
    /// # Errors
    /// `HangmanError::NoActiveRound`, or any error from [`RoundState::make_guess`].
    pub fn make_guess(&mut self, letter: char) -> Result<FamilySizes, HangmanError> {
        self.round_mut()?.make_guess(letter)
    }

    /// Resolve the active round's secret word
    ///
    /// # Errors
    /// `HangmanError::NoActiveRound`, or any error from [`RoundState::resolve_secret_word`].
    pub fn resolve_secret_word(&self) -> Result<&Word, HangmanError> {
        self.round()?.resolve_secret_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> HangmanManager {
        HangmanManager::new(["cat", "cap", "car", "dog", "bird"]).unwrap()
    }

    #[test]
    fn operations_before_start_fail() {
        let mut manager = manager();
        assert_eq!(manager.round().unwrap_err(), HangmanError::NoActiveRound);
        assert_eq!(manager.make_guess('a').unwrap_err(), HangmanError::NoActiveRound);
        assert_eq!(
            manager.resolve_secret_word().unwrap_err(),
            HangmanError::NoActiveRound
        );
    }

    #[test]
    fn start_round_replaces_previous() {
        let mut manager = manager();
        manager.start_round(3, 5, Difficulty::Hard).unwrap();
        manager.make_guess('a').unwrap();

        manager.start_round(4, 2, Difficulty::Easy).unwrap();
        let round = manager.round().unwrap();
        assert_eq!(round.current_pattern(), "----");
        assert_eq!(round.wrong_guesses_left(), 2);
        assert!(round.sorted_guessed_letters().is_empty());
        assert_eq!(round.difficulty(), Difficulty::Easy);
    }

    #[test]
    fn failed_start_keeps_previous_round() {
        let mut manager = manager();
        manager.start_round(3, 5, Difficulty::Hard).unwrap();
        manager.make_guess('a').unwrap();

        assert_eq!(
            manager.start_round(9, 5, Difficulty::Hard).unwrap_err(),
            HangmanError::NoWordsOfLength(9)
        );
        assert_eq!(manager.round().unwrap().current_pattern(), "-a-");
    }

    #[test]
    fn resolve_delegates_to_round() {
        let mut manager = manager();
        manager.start_round(4, 5, Difficulty::Hard).unwrap();
        assert_eq!(manager.resolve_secret_word().unwrap().text(), "bird");
    }

    #[test]
    fn empty_word_collection_rejected() {
        let words: Vec<String> = Vec::new();
        assert_eq!(
            HangmanManager::new(words).unwrap_err(),
            HangmanError::EmptyDictionary
        );
    }
}
