//! Simple interactive CLI mode
//!
//! Text-based hangman game without TUI

use super::RoundConfig;
use crate::game::HangmanManager;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Run the simple interactive CLI mode
///
/// Reads guesses line by line from `input` and writes the game to `output`.
/// Ends on `quit`, on end of input, or when the player declines a rematch.
///
/// # Errors
///
/// Returns an error if the round cannot start or on an I/O failure.
pub fn run_simple<R: BufRead, W: Write>(
    manager: &mut HangmanManager,
    config: RoundConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                   Hangman - Interactive Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "I'm thinking of a {}-letter word.", config.word_length)?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    loop {
        let round = manager
            .start_round(
                config.word_length,
                config.max_wrong_guesses,
                config.difficulty,
            )
            .with_context(|| format!("cannot start a {}-letter round", config.word_length))?;

        while !round.is_solved() && !round.is_lost() {
            writeln!(output, "────────────────────────────────────────────────────────────")?;
            writeln!(output, "Guesses left:   {}", round.wrong_guesses_left())?;
            writeln!(output, "Guessed so far: {}", round.guessed_letters_string())?;
            writeln!(
                output,
                "Current word:   {}",
                round.pattern().spaced().bright_white().bold()
            )?;

            let Some(line) = get_user_input(input, output, "Your guess")? else {
                return Ok(());
            };

            if matches!(line.as_str(), "quit" | "q" | "exit") {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }

            let mut chars = line.chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                writeln!(output, "{}", "❌ Please enter a single letter.".red())?;
                continue;
            };
            let letter = letter.to_ascii_lowercase();

            if round.has_been_guessed(letter) {
                writeln!(output, "{}", "You already guessed that! Try again.".yellow())?;
                continue;
            }

            let families = round.make_guess(letter)?;
            debug!(?families, "family breakdown");

            let count = round
                .pattern()
                .to_string()
                .chars()
                .filter(|&c| c == letter)
                .count();
            match count {
                0 => writeln!(output, "{}", format!("Sorry, there are no {letter}'s").red())?,
                1 => writeln!(output, "{}", format!("Yes, there is one {letter}").green())?,
                n => writeln!(output, "{}", format!("Yes, there are {n} {letter}'s").green())?,
            }
        }

        let answer = round.resolve_secret_word()?.to_string();
        if round.is_solved() {
            writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
            writeln!(
                output,
                "{}",
                format!("🎉 You beat me! The word was {answer}.").bright_green().bold()
            )?;
            writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
        } else {
            writeln!(output, "\n{}", "═".repeat(60).bright_red())?;
            writeln!(
                output,
                "{}",
                format!("💀 Sorry, you lose! The correct word was {answer}.").red().bold()
            )?;
            writeln!(output, "{}", "═".repeat(60).bright_red())?;
        }

        match get_user_input(input, output, "Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => writeln!(output, "\n🔄 New game started!\n")?,
            _ => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
