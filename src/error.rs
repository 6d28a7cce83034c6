//! Error types for the hangman host
//!
//! Every failure is a caller-correctable contract violation. Checks run before
//! any mutation, so an `Err` never leaves a round half-updated.

use thiserror::Error;

/// Broad category of a [`HangmanError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller asked for something the dictionary or rules cannot satisfy
    InvalidArgument,
    /// The call is not legal in the current round state
    InvalidState,
}

/// Errors raised by the dictionary, the manager and the active round
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    #[error("the dictionary contains no words")]
    EmptyDictionary,
    #[error("no dictionary word has length {0}")]
    NoWordsOfLength(usize),
    #[error("the wrong-guess budget must be at least 1")]
    InvalidGuessBudget,
    #[error("the letter '{0}' has already been guessed")]
    AlreadyGuessed(char),
    #[error("no wrong guesses remain in this round")]
    NoGuessesLeft,
    #[error("no candidate words remain")]
    NoCandidates,
    #[error("no round has been started")]
    NoActiveRound,
}

impl HangmanError {
    /// Category of this error
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::{ErrorKind, HangmanError};
    ///
    /// assert_eq!(HangmanError::NoWordsOfLength(42).kind(), ErrorKind::InvalidArgument);
    /// assert_eq!(HangmanError::AlreadyGuessed('e').kind(), ErrorKind::InvalidState);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyDictionary | Self::NoWordsOfLength(_) | Self::InvalidGuessBudget => {
                ErrorKind::InvalidArgument
            }
            Self::AlreadyGuessed(_)
            | Self::NoGuessesLeft
            | Self::NoCandidates
            | Self::NoActiveRound => ErrorKind::InvalidState,
        }
    }
}
