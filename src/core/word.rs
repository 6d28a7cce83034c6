//! Hangman word representation
//!
//! A Word stores its text along with letter position indices for pattern calculation.

use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// A dictionary word with letter position tracking
///
/// Length is counted in `char`s. The contents are taken as given: no case
/// folding and no alphabet check.
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    letters: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError::Empty` for the empty string.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("cat").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let letters: Vec<char> = text.chars().collect();

        // Build position map for fast lookup
        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in letters.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letters,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.char_positions.keys().copied()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl PartialOrd for Word {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Word {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("cat").unwrap();
        assert_eq!(word.text(), "cat");
        assert_eq!(word.letters(), &['c', 'a', 't']);
        assert_eq!(word.len(), 3);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_keeps_case() {
        let word = Word::new("Cat").unwrap();
        assert_eq!(word.text(), "Cat");
        assert!(word.has_letter('C'));
        assert!(!word.has_letter('c'));
    }

    #[test]
    fn word_creation_empty_rejected() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_length_counts_chars() {
        let word = Word::new("café").unwrap();
        assert_eq!(word.len(), 4);
        assert_eq!(word.positions_of('é'), &[3]);
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crane").unwrap();
        assert!(word.has_letter('c'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_positions_of_duplicates() {
        let word = Word::new("banana").unwrap();
        assert_eq!(word.positions_of('a'), &[1, 3, 5]);
        assert_eq!(word.positions_of('n'), &[2, 4]);
        assert_eq!(word.positions_of('b'), &[0]);
        assert!(word.positions_of('z').is_empty());
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("banana").unwrap();
        let mut letters: Vec<char> = word.distinct_letters().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['a', 'b', 'n']);
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "crane");
    }

    #[test]
    fn word_ordering_follows_text() {
        let mut words = vec![
            Word::new("dog").unwrap(),
            Word::new("cat").unwrap(),
            Word::new("car").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["car", "cat", "dog"]);
    }
}
