//! Dictionary statistics command
//!
//! Word counts per length, plus how much ground the host can hold for each
//! possible opening letter at one length.

use crate::core::Pattern;
use crate::dictionary::Dictionary;
use crate::game::{WordFamily, partition};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

/// How the candidates split if a letter is guessed first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningLetter {
    pub letter: char,
    /// Size of the hardest family, i.e. what a hard host keeps
    pub largest_family: usize,
    pub families: usize,
}

/// Result of analyzing a dictionary
pub struct DictionaryStats {
    pub total_words: usize,
    pub by_length: BTreeMap<usize, usize>,
    pub word_length: usize,
    pub candidates: usize,
    pub opening_letters: Vec<OpeningLetter>,
}

/// Analyze a dictionary, with opening letters evaluated at `word_length`
///
/// Opening letters come back best-for-the-guesser first: smallest hardest
/// family, then most families, then alphabetical.
#[must_use]
pub fn dictionary_stats(dictionary: &Dictionary, word_length: usize) -> DictionaryStats {
    let words = dictionary.words_of_length(word_length);

    let letters: FxHashSet<char> = words.iter().flat_map(|w| w.distinct_letters()).collect();
    let start = Pattern::unrevealed(word_length);

    let mut opening_letters: Vec<OpeningLetter> = letters
        .into_par_iter()
        .map(|letter| {
            let families = partition(&start, letter, words.to_vec());
            OpeningLetter {
                letter,
                largest_family: families.first().map_or(0, WordFamily::len),
                families: families.len(),
            }
        })
        .collect();

    opening_letters.sort_by(|a, b| {
        a.largest_family
            .cmp(&b.largest_family)
            .then_with(|| b.families.cmp(&a.families))
            .then_with(|| a.letter.cmp(&b.letter))
    });

    DictionaryStats {
        total_words: dictionary.len(),
        by_length: dictionary.length_histogram(),
        word_length,
        candidates: words.len(),
        opening_letters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_count_lengths() {
        let dictionary = Dictionary::new(["cat", "cap", "car", "dog", "bird"]).unwrap();
        let stats = dictionary_stats(&dictionary, 3);

        assert_eq!(stats.total_words, 5);
        assert_eq!(stats.by_length.get(&3), Some(&4));
        assert_eq!(stats.by_length.get(&4), Some(&1));
        assert_eq!(stats.candidates, 4);
    }

    #[test]
    fn opening_letters_ranked_for_guesser() {
        let dictionary = Dictionary::new(["cat", "cap", "car", "dog"]).unwrap();
        let stats = dictionary_stats(&dictionary, 3);

        // Every letter splits the four words 3/1
        let best = &stats.opening_letters[0];
        assert_eq!(best.largest_family, 3);
        assert!(stats.opening_letters.iter().all(|o| o.largest_family == 3));

        // Alphabetical among equals
        assert_eq!(best.letter, 'a');
        assert_eq!(stats.opening_letters.len(), 8);
    }

    #[test]
    fn unknown_length_has_no_opening_letters() {
        let dictionary = Dictionary::new(["cat"]).unwrap();
        let stats = dictionary_stats(&dictionary, 9);
        assert_eq!(stats.candidates, 0);
        assert!(stats.opening_letters.is_empty());
    }
}
