//! Evil Hangman
//!
//! A hangman host that never commits to a secret word. Each guess splits the
//! remaining candidates into word families, and the host keeps whichever
//! family its difficulty allows, usually the largest.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::HangmanManager;
//! use evil_hangman::core::Difficulty;
//!
//! let mut manager = HangmanManager::new(["ally", "beta", "cool", "deal", "else", "good"])?;
//! manager.start_round(4, 7, Difficulty::Hard)?;
//!
//! let families = manager.make_guess('e')?;
//! assert_eq!(families.get("----"), Some(&3));
//! assert_eq!(families.get("-e--"), Some(&2));
//!
//! let round = manager.round()?;
//! assert_eq!(round.current_pattern(), "----");
//! assert_eq!(round.wrong_guesses_left(), 6);
//! # Ok::<(), evil_hangman::HangmanError>(())
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod dictionary;

// Error types
pub mod error;

// Round state and family selection
pub mod game;

// Automated guessers
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{ErrorKind, HangmanError};
pub use game::HangmanManager;
