//! Length-indexed word collection

use crate::core::Word;
use crate::error::HangmanError;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use tracing::debug;

/// The full, immutable word collection a round draws its candidates from
///
/// Words are bucketed by length (in `char`s) and each bucket is kept sorted,
/// so every query returns words in the same order.
#[derive(Debug, Clone)]
pub struct Dictionary {
    by_length: FxHashMap<usize, Vec<Word>>,
    total: usize,
}

impl Dictionary {
    /// Build a dictionary from a word collection
    ///
    /// Empty strings are skipped and duplicates collapse to one entry.
    ///
    /// # Errors
    /// Returns `HangmanError::EmptyDictionary` if no word is left.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::dictionary::Dictionary;
    ///
    /// let dictionary = Dictionary::new(["cat", "cap", "car", "dog", "cat"]).unwrap();
    /// assert_eq!(dictionary.len(), 4);
    /// assert_eq!(dictionary.count_by_length(3), 4);
    /// assert_eq!(dictionary.count_by_length(5), 0);
    /// ```
    pub fn new<I, S>(words: I) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut by_length: FxHashMap<usize, Vec<Word>> = FxHashMap::default();

        for text in words {
            let text: String = text.into();
            if seen.contains(&text) {
                continue;
            }
            // Only the empty string is rejected
            let Ok(word) = Word::new(text.clone()) else {
                continue;
            };
            seen.insert(text);
            by_length.entry(word.len()).or_default().push(word);
        }

        if seen.is_empty() {
            return Err(HangmanError::EmptyDictionary);
        }

        for bucket in by_length.values_mut() {
            bucket.sort_unstable();
        }

        debug!(
            words = seen.len(),
            lengths = by_length.len(),
            "dictionary built"
        );

        Ok(Self {
            by_length,
            total: seen.len(),
        })
    }

    /// Build the dictionary compiled into the binary
    ///
    /// # Errors
    /// Only if the embedded list were empty.
    pub fn embedded() -> Result<Self, HangmanError> {
        Self::new(super::DICTIONARY.iter().copied())
    }

    /// Total number of distinct words
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    /// Always false for a constructed dictionary
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of words of exactly `length` letters
    #[must_use]
    pub fn count_by_length(&self, length: usize) -> usize {
        self.by_length.get(&length).map_or(0, Vec::len)
    }

    /// All words of exactly `length` letters, sorted
    #[must_use]
    pub fn filter_by_length(&self, length: usize) -> Vec<Word> {
        self.words_of_length(length).to_vec()
    }

    /// Borrowed view of the words of exactly `length` letters
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[Word] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Word lengths present in the dictionary, ascending
    #[must_use]
    pub fn lengths(&self) -> Vec<usize> {
        let mut lengths: Vec<usize> = self.by_length.keys().copied().collect();
        lengths.sort_unstable();
        lengths
    }

    /// Word count for every length present, keyed by length
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        self.by_length
            .iter()
            .map(|(&length, words)| (length, words.len()))
            .collect()
    }
}
