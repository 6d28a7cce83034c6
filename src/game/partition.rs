//! Word family partitioning
//!
//! Given the current pattern and a guessed letter, every candidate falls into
//! exactly one family: the set of candidates that would show the same pattern
//! once the letter is applied.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Candidates sharing one resulting pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFamily {
    pattern: Pattern,
    words: Vec<Word>,
}

impl WordFamily {
    /// The pattern every member shows after the guess
    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Members of the family
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true for a family produced by [`partition`]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Take the members, dropping the pattern
    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }
}

/// Group candidates by the pattern they would show after `letter` is guessed
///
/// Families come back hardest first: larger families before smaller ones, and
/// equal sizes in ascending order of their rendered pattern. Members keep the
/// order they had in `candidates`. The families partition `candidates`
/// exactly and none is empty.
///
/// # Examples
/// ```
/// use evil_hangman::core::{Pattern, Word};
/// use evil_hangman::game::partition;
///
/// let candidates: Vec<Word> = ["cat", "cap", "car", "dog"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let families = partition(&Pattern::unrevealed(3), 'a', candidates);
/// assert_eq!(families.len(), 2);
/// assert_eq!(families[0].pattern().to_string(), "-a-");
/// assert_eq!(families[0].len(), 3);
/// assert_eq!(families[1].pattern().to_string(), "---");
/// ```
#[must_use]
pub fn partition(pattern: &Pattern, letter: char, candidates: Vec<Word>) -> Vec<WordFamily> {
    let mut groups: FxHashMap<Pattern, Vec<Word>> = FxHashMap::default();

    for candidate in candidates {
        let resulting = pattern.with_letter(&candidate, letter);
        groups.entry(resulting).or_default().push(candidate);
    }

    let mut families: Vec<WordFamily> = groups
        .into_iter()
        .map(|(pattern, words)| WordFamily { pattern, words })
        .collect();

    families.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.pattern.cmp(&b.pattern))
    });

    families
}

/// Size of every family, keyed by its rendered pattern
#[must_use]
pub fn family_sizes(families: &[WordFamily]) -> BTreeMap<String, usize> {
    families
        .iter()
        .map(|family| (family.pattern.to_string(), family.len()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    fn sorted_texts(words: &[Word]) -> Vec<String> {
        let mut texts: Vec<String> = words.iter().map(ToString::to_string).collect();
        texts.sort();
        texts
    }

    #[test]
    fn groups_by_resulting_pattern() {
        let candidates = words(&["cat", "cap", "car", "dog"]);
        let families = partition(&Pattern::unrevealed(3), 'a', candidates);

        assert_eq!(families.len(), 2);
        assert_eq!(families[0].pattern().to_string(), "-a-");
        assert_eq!(sorted_texts(families[0].words()), vec!["cap", "car", "cat"]);
        assert_eq!(families[1].pattern().to_string(), "---");
        assert_eq!(sorted_texts(families[1].words()), vec!["dog"]);
    }

    #[test]
    fn repeated_letters_form_their_own_family() {
        let candidates = words(&["ally", "beta", "cola", "aqua"]);
        let families = partition(&Pattern::unrevealed(4), 'a', candidates);

        let sizes = family_sizes(&families);
        assert_eq!(sizes.get("---a"), Some(&2));
        assert_eq!(sizes.get("a---"), Some(&1));
        assert_eq!(sizes.get("a--a"), Some(&1));
        assert_eq!(families[0].pattern().to_string(), "---a");
    }

    #[test]
    fn letter_absent_everywhere_gives_one_family() {
        let candidates = words(&["cat", "cap", "car"]);
        let start: Pattern = "-a-".parse().unwrap();
        let families = partition(&start, 'z', candidates);

        assert_eq!(families.len(), 1);
        assert_eq!(families[0].pattern(), &start);
        assert_eq!(families[0].len(), 3);
    }

    #[test]
    fn keeps_already_revealed_letters() {
        let candidates = words(&["cat", "cap"]);
        let start: Pattern = "-a-".parse().unwrap();
        let families = partition(&start, 't', candidates);

        let sizes = family_sizes(&families);
        assert_eq!(sizes.get("-at"), Some(&1));
        assert_eq!(sizes.get("-a-"), Some(&1));
    }

    #[test]
    fn equal_sizes_sorted_by_pattern() {
        let candidates = words(&["ab", "ba", "cc", "dd"]);
        let families = partition(&Pattern::unrevealed(2), 'a', candidates);

        let order: Vec<String> = families.iter().map(|f| f.pattern().to_string()).collect();
        // "--" holds two words, then the singletons in string order
        assert_eq!(order, vec!["--", "-a", "a-"]);
    }

    #[test]
    fn ordering_is_size_descending_then_pattern_ascending() {
        let candidates = words(&[
            "bake", "cake", "lake", "make", "area", "aloe", "idea", "oboe", "tree",
        ]);
        let families = partition(&Pattern::unrevealed(4), 'a', candidates);

        for pair in families.windows(2) {
            assert!(pair[0].len() >= pair[1].len());
            if pair[0].len() == pair[1].len() {
                assert!(pair[0].pattern().to_string() < pair[1].pattern().to_string());
            }
        }
    }

    #[test]
    fn partition_is_complete() {
        let texts = ["bake", "cake", "lake", "area", "aloe", "idea", "oboe", "tree"];
        let families = partition(&Pattern::unrevealed(4), 'e', words(&texts));

        assert!(families.iter().all(|f| !f.is_empty()));

        let all: Vec<Word> = families
            .into_iter()
            .flat_map(WordFamily::into_words)
            .collect();
        let mut expected: Vec<String> = texts.iter().map(ToString::to_string).collect();
        expected.sort();
        assert_eq!(sorted_texts(&all), expected);
    }

    #[test]
    fn ordering_is_deterministic() {
        let texts = ["ab", "ba", "cc", "dd", "aa", "bb"];
        let first = partition(&Pattern::unrevealed(2), 'a', words(&texts));
        let second = partition(&Pattern::unrevealed(2), 'a', words(&texts));
        assert_eq!(first, second);
    }

    #[test]
    fn guessing_the_placeholder_keeps_families_distinct() {
        let candidates = words(&["a-b", "ab-", "abc"]);
        let families = partition(&Pattern::unrevealed(3), '-', candidates);

        assert_eq!(families.len(), 1);
        let sizes = family_sizes(&families);
        assert_eq!(sizes.values().sum::<usize>(), 3);
        assert_eq!(sizes.get("---"), Some(&3));
    }

    #[test]
    fn empty_candidates_give_no_families() {
        let families = partition(&Pattern::unrevealed(3), 'a', Vec::new());
        assert!(families.is_empty());
        assert!(family_sizes(&families).is_empty());
    }
}
