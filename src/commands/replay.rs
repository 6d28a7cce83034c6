//! Replay command
//!
//! Plays a fixed sequence of letters against the host and records every
//! family breakdown along the way.

use super::RoundConfig;
use crate::core::Word;
use crate::error::HangmanError;
use crate::game::{FamilySizes, HangmanManager};

/// A single guess in the replay
pub struct ReplayStep {
    pub letter: char,
    pub families: FamilySizes,
    pub pattern_after: String,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub hit: bool,
    pub wrong_guesses_left: u32,
}

/// Result of replaying a letter sequence
pub struct ReplayResult {
    pub config: RoundConfig,
    pub steps: Vec<ReplayStep>,
    pub solved: bool,
    pub lost: bool,
    pub secret_word: String,
}

/// Replay `letters` in order
///
/// Whitespace and punctuation in `letters` are ignored. The replay stops early
/// once the word is revealed or the budget is spent.
///
/// # Errors
///
/// Returns an error if the round cannot start, or if a letter repeats.
pub fn replay_letters(
    manager: &mut HangmanManager,
    config: RoundConfig,
    letters: &str,
) -> Result<ReplayResult, HangmanError> {
    let round = manager.start_round(
        config.word_length,
        config.max_wrong_guesses,
        config.difficulty,
    )?;

    let mut steps = Vec::new();

    for letter in letters.chars().filter(|c| c.is_alphanumeric()) {
        if round.is_solved() || round.is_lost() {
            break;
        }

        let candidates_before = round.remaining_candidate_count();
        let wrong_before = round.wrong_guesses_left();
        let families = round.make_guess(letter)?;

        steps.push(ReplayStep {
            letter,
            families,
            pattern_after: round.current_pattern(),
            candidates_before,
            candidates_after: round.remaining_candidate_count(),
            hit: round.wrong_guesses_left() == wrong_before,
            wrong_guesses_left: round.wrong_guesses_left(),
        });
    }

    Ok(ReplayResult {
        config,
        steps,
        solved: round.is_solved(),
        lost: round.is_lost(),
        secret_word: round.resolve_secret_word().map(Word::to_string)?,
    })
}
