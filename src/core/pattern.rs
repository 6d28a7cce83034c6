//! Hangman reveal pattern
//!
//! A pattern is what the guesser sees: one cell per letter of the secret word,
//! each either revealed or still hidden. It renders as a string with `-` for
//! hidden cells, so `-a-` is a three-letter word whose middle letter is `a`.

use super::Word;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

/// Reveal pattern for a hangman round
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    cells: Vec<Option<char>>,
}

impl Pattern {
    /// Placeholder rendered for a hidden cell
    pub const UNREVEALED: char = '-';

    /// A pattern of `len` hidden cells
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Pattern;
    ///
    /// assert_eq!(Pattern::unrevealed(4).to_string(), "----");
    /// ```
    #[must_use]
    pub fn unrevealed(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Number of cells
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for the zero-length pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The letter revealed at `position`, if any
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn revealed_at(&self, position: usize) -> Option<char> {
        self.cells[position]
    }

    /// Number of revealed cells
    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// True once every cell is revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check whether `letter` is revealed anywhere
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// The pattern `word` would show after `letter` is guessed
    ///
    /// Keeps every cell already revealed and additionally reveals each
    /// position where `word` has `letter`. [`Pattern::UNREVEALED`] is never
    /// revealed, since it would render the same as a hidden cell; guessing
    /// it leaves the pattern unchanged.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Pattern, Word};
    ///
    /// let start = Pattern::unrevealed(6);
    /// let banana = Word::new("banana").unwrap();
    ///
    /// let after_a = start.with_letter(&banana, 'a');
    /// assert_eq!(after_a.to_string(), "-a-a-a");
    ///
    /// let after_n = after_a.with_letter(&banana, 'n');
    /// assert_eq!(after_n.to_string(), "-anana");
    /// ```
    #[must_use]
    pub fn with_letter(&self, word: &Word, letter: char) -> Self {
        debug_assert_eq!(word.len(), self.len(), "word length must match pattern");

        if letter == Self::UNREVEALED {
            return self.clone();
        }

        let mut cells = self.cells.clone();
        for &position in word.positions_of(letter) {
            cells[position] = Some(letter);
        }
        Self { cells }
    }

    /// Check whether `word` is still possible given this pattern and the letters guessed so far
    ///
    /// Every revealed cell must match, and no hidden cell may hold a letter
    /// that has already been guessed (it would have been revealed), except
    /// [`Pattern::UNREVEALED`], which stays hidden.
    #[must_use]
    pub fn admits(&self, word: &Word, guessed: &BTreeSet<char>) -> bool {
        word.len() == self.len()
            && self
                .cells
                .iter()
                .zip(word.letters())
                .all(|(cell, &letter)| match cell {
                    Some(revealed) => *revealed == letter,
                    None => letter == Self::UNREVEALED || !guessed.contains(&letter),
                })
    }

    /// Characters as rendered, hidden cells as [`Pattern::UNREVEALED`]
    fn rendered(&self) -> impl Iterator<Item = char> + '_ {
        self.cells
            .iter()
            .map(|cell| cell.unwrap_or(Self::UNREVEALED))
    }

    /// Render with a separator between cells, e.g. `- a -`
    #[must_use]
    pub fn spaced(&self) -> String {
        let mut out = String::with_capacity(self.len() * 2);
        for (i, ch) in self.rendered().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in self.rendered() {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

/// Patterns order like their rendered strings
impl Ord for Pattern {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rendered()
            .cmp(other.rendered())
            .then_with(|| self.cells.cmp(&other.cells))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    /// Parse a rendered pattern such as `-a-`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err("Invalid pattern string: empty".to_string());
        }

        let cells = s
            .chars()
            .map(|ch| (ch != Self::UNREVEALED).then_some(ch))
            .collect();
        Ok(Self { cells })
    }
}
