//! State of a single hangman round

use super::partition::{family_sizes, partition};
use super::selector::DifficultySelector;
use crate::core::{Difficulty, Pattern, Word};
use crate::dictionary::Dictionary;
use crate::error::HangmanError;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, trace};

/// Size of every family produced by one guess, keyed by rendered pattern
pub type FamilySizes = BTreeMap<String, usize>;

/// One round of evil hangman
///
/// Every active candidate is consistent with the pattern: applying all
/// guessed letters to it reproduces the pattern exactly. Guesses only ever
/// reveal cells and shrink the candidate set.
#[derive(Debug, Clone)]
pub struct RoundState {
    word_length: usize,
    max_wrong_guesses: u32,
    wrong_guesses_left: u32,
    pattern: Pattern,
    guessed: BTreeSet<char>,
    candidates: Vec<Word>,
    selector: DifficultySelector,
}

impl RoundState {
    /// Start a round over every dictionary word of `word_length` letters
    ///
    /// # Errors
    /// - `HangmanError::NoWordsOfLength` if the dictionary has no such word
    /// - `HangmanError::InvalidGuessBudget` if `max_wrong_guesses` is 0
    pub fn new(
        dictionary: &Dictionary,
        word_length: usize,
        max_wrong_guesses: u32,
        difficulty: Difficulty,
    ) -> Result<Self, HangmanError> {
        if dictionary.count_by_length(word_length) == 0 {
            return Err(HangmanError::NoWordsOfLength(word_length));
        }
        if max_wrong_guesses < 1 {
            return Err(HangmanError::InvalidGuessBudget);
        }

        let candidates = dictionary.filter_by_length(word_length);
        info!(
            word_length,
            max_wrong_guesses,
            %difficulty,
            candidates = candidates.len(),
            "round started"
        );

        Ok(Self {
            word_length,
            max_wrong_guesses,
            wrong_guesses_left: max_wrong_guesses,
            pattern: Pattern::unrevealed(word_length),
            guessed: BTreeSet::new(),
            candidates,
            selector: DifficultySelector::new(difficulty),
        })
    }

    /// Adjudicate a guessed letter
    ///
    /// Partitions the candidates into families, keeps the one the difficulty
    /// policy selects, and either reveals the letter (if the kept family
    /// contains it) or charges a wrong guess. Returns the size of every
    /// family considered.
    ///
    /// # Errors
    /// - `HangmanError::NoGuessesLeft` once the wrong-guess budget is spent
    /// - `HangmanError::AlreadyGuessed` for a repeated letter
    /// - `HangmanError::NoCandidates` if no candidate remains
    ///
    /// Nothing is changed when an error is returned.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Difficulty;
    /// use evil_hangman::dictionary::Dictionary;
    /// use evil_hangman::game::RoundState;
    ///
    /// let dictionary = Dictionary::new(["cat", "cap", "car", "dog"]).unwrap();
    /// let mut round = RoundState::new(&dictionary, 3, 5, Difficulty::Hard).unwrap();
    ///
    /// let sizes = round.make_guess('a').unwrap();
    /// assert_eq!(sizes.get("-a-"), Some(&3));
    /// assert_eq!(sizes.get("---"), Some(&1));
    /// assert_eq!(round.current_pattern(), "-a-");
    /// assert_eq!(round.wrong_guesses_left(), 5);
    /// ```
    pub fn make_guess(&mut self, letter: char) -> Result<FamilySizes, HangmanError> {
        if self.wrong_guesses_left == 0 {
            return Err(HangmanError::NoGuessesLeft);
        }
        if self.guessed.contains(&letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }
        if self.candidates.is_empty() {
            return Err(HangmanError::NoCandidates);
        }

        self.guessed.insert(letter);

        let candidates = std::mem::take(&mut self.candidates);
        let mut families = partition(&self.pattern, letter, candidates);
        let sizes = family_sizes(&families);

        for family in &families {
            trace!(pattern = %family.pattern(), size = family.len(), "family");
        }

        let index = self.selector.select_index(families.len());
        let chosen = families.swap_remove(index);
        let hit = chosen.pattern().contains(letter);

        debug!(
            %letter,
            families = sizes.len(),
            index,
            chosen = %chosen.pattern(),
            remaining = chosen.len(),
            hit,
            "guess adjudicated"
        );

        if hit {
            self.pattern = chosen.pattern().clone();
        } else {
            self.wrong_guesses_left -= 1;
        }
        self.candidates = chosen.into_words();

        Ok(sizes)
    }

    /// Settle on one concrete secret word
    ///
    /// A lone remaining candidate is returned as is; otherwise one is chosen
    /// uniformly at random.
    ///
    /// # Errors
    /// Returns `HangmanError::NoCandidates` if no candidate remains.
    pub fn resolve_secret_word(&self) -> Result<&Word, HangmanError> {
        self.resolve_secret_word_with(&mut rand::rng())
    }

    /// [`RoundState::resolve_secret_word`] with a caller-supplied random source
    ///
    /// # Errors
    /// Returns `HangmanError::NoCandidates` if no candidate remains.
    pub fn resolve_secret_word_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<&Word, HangmanError> {
        match self.candidates.as_slice() {
            [] => Err(HangmanError::NoCandidates),
            [only] => Ok(only),
            many => many.choose(rng).ok_or(HangmanError::NoCandidates),
        }
    }

    /// Number of candidates still consistent with every guess
    #[must_use]
    pub fn remaining_candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Read-only view of the remaining candidates
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn wrong_guesses_left(&self) -> u32 {
        self.wrong_guesses_left
    }

    #[must_use]
    pub const fn max_wrong_guesses(&self) -> u32 {
        self.max_wrong_guesses
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.selector.difficulty()
    }

    /// Letters guessed so far, ascending
    #[must_use]
    pub fn sorted_guessed_letters(&self) -> Vec<char> {
        self.guessed.iter().copied().collect()
    }

    /// Guessed letters rendered as `[a, e, t]`
    #[must_use]
    pub fn guessed_letters_string(&self) -> String {
        let letters: Vec<String> = self.guessed.iter().map(char::to_string).collect();
        format!("[{}]", letters.join(", "))
    }

    #[must_use]
    pub fn has_been_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    /// The pattern as the guesser sees it, `-` for hidden cells
    #[must_use]
    pub fn current_pattern(&self) -> String {
        self.pattern.to_string()
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// True once every cell is revealed
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pattern.is_complete()
    }

    /// True once the wrong-guess budget is spent
    #[must_use]
    pub const fn is_lost(&self) -> bool {
        self.wrong_guesses_left == 0
    }
}
