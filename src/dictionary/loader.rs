//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Surrounding whitespace is trimmed and blank lines are skipped. Nothing
/// else is filtered: the dictionary takes its contents as given.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_text(&content))
}

/// Split text into words, one per non-blank line
#[must_use]
pub fn words_from_text(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Convert embedded string slice to an owned word vector
///
/// # Examples
/// ```
/// use evil_hangman::dictionary::loader::words_from_slice;
/// use evil_hangman::dictionary::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|&s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("cat\n\n  dog  \r\n\t\nbird\n");
        assert_eq!(words, vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn words_from_text_keeps_contents_as_given() {
        let words = words_from_text("Cat\nco-op\n");
        assert_eq!(words, vec!["Cat", "co-op"]);
    }

    #[test]
    fn words_from_slice_converts_all() {
        let words = words_from_slice(&["crane", "slate", "a"]);
        assert_eq!(words, vec!["crane", "slate", "a"]);
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }
}
