//! TUI application state and logic

use crate::commands::RoundConfig;
use crate::error::HangmanError;
use crate::game::{FamilySizes, HangmanManager, RoundState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{debug, info, warn};

/// Application state
pub struct App {
    pub manager: HangmanManager,
    pub config: RoundConfig,
    pub history: Vec<HistoryEntry>,
    pub last_families: FamilySizes,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub letter: char,
    pub pattern: String,
    pub hit: bool,
    pub families: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl App {
    /// Create the app and start its first round
    ///
    /// # Errors
    ///
    /// Returns an error if the dictionary cannot support `config`.
    pub fn new(mut manager: HangmanManager, config: RoundConfig) -> Result<Self, HangmanError> {
        manager.start_round(
            config.word_length,
            config.max_wrong_guesses,
            config.difficulty,
        )?;

        Ok(Self {
            manager,
            config,
            history: Vec::new(),
            last_families: FamilySizes::new(),
            messages: vec![
                Message {
                    text: format!("I'm thinking of a {}-letter word.", config.word_length),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a letter to guess it.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Guessing,
            answer: None,
        })
    }

    /// The active round, if the manager has one
    #[must_use]
    pub fn round(&self) -> Option<&RoundState> {
        self.manager.round().ok()
    }

    pub fn handle_guess(&mut self, letter: char) {
        if !letter.is_alphabetic() {
            self.add_message("Letters only!", MessageStyle::Error);
            return;
        }
        let letter = letter.to_ascii_lowercase();

        let round = match self.manager.round_mut() {
            Ok(round) => round,
            Err(err) => {
                warn!(%err, "guess without a round");
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if round.has_been_guessed(letter) {
            self.add_message(
                &format!("You already guessed '{letter}'!"),
                MessageStyle::Error,
            );
            return;
        }

        let candidates_before = round.remaining_candidate_count();
        let budget_before = round.wrong_guesses_left();
        let families = match round.make_guess(letter) {
            Ok(families) => families,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };
        let hit = round.wrong_guesses_left() == budget_before;
        let entry = HistoryEntry {
            letter,
            pattern: round.current_pattern(),
            hit,
            families: families.len(),
            candidates_before,
            candidates_after: round.remaining_candidate_count(),
        };
        let finished = round.is_solved() || round.is_lost();
        debug!(letter = %letter, families = families.len(), "tui guess");

        let text = if hit {
            format!("Yes! '{letter}' is in the word: {}", entry.pattern)
        } else {
            format!("Sorry, no '{letter}'.")
        };
        let style = if hit {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };

        self.history.push(entry);
        self.last_families = families;
        self.add_message(&text, style);

        if finished {
            self.finish_round();
        }
    }

    fn finish_round(&mut self) {
        let Some(round) = self.round() else {
            return;
        };
        let solved = round.is_solved();
        let answer = match round.resolve_secret_word() {
            Ok(word) => word.to_string(),
            Err(err) => {
                warn!(%err, "round ended without candidates");
                String::new()
            }
        };

        self.stats.total_games += 1;
        if solved {
            self.stats.games_won += 1;
            self.add_message(
                &format!("🎉 You beat me! The word was {answer}."),
                MessageStyle::Success,
            );
        } else {
            self.add_message(
                &format!("💀 Out of guesses! The word was {answer}."),
                MessageStyle::Error,
            );
        }
        info!(solved, answer = %answer, "tui round finished");

        self.answer = Some(answer);
        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if let Err(err) = self.manager.start_round(
            self.config.word_length,
            self.config.max_wrong_guesses,
            self.config.difficulty,
        ) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        self.history.clear();
        self.last_families.clear();
        self.messages.clear();
        self.answer = None;
        self.input_mode = InputMode::Guessing;
        self.add_message(
            &format!(
                "New game! I'm thinking of a {}-letter word.",
                self.config.word_length
            ),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn get_candidates_count(&self) -> usize {
        self.round().map_or(0, RoundState::remaining_candidate_count)
    }
}

/// Send log output to a file while the terminal is in raw mode
///
/// # Errors
///
/// Returns an error if the log file cannot be created.
pub fn init_file_logging() -> Result<()> {
    let log_file = std::fs::File::create("evil_hangman_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') | KeyCode::Enter => app.new_game(),
                        _ => {}
                    },
                    // Every letter is a guess, so quitting mid-round is Esc only
                    InputMode::Guessing => {
                        if let KeyCode::Char(c) = key.code {
                            app.handle_guess(c);
                        }
                    }
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;

    fn app(words: &[&str], config: RoundConfig) -> App {
        let manager = HangmanManager::new(words.iter().copied()).unwrap();
        App::new(manager, config).unwrap()
    }

    #[test]
    fn new_app_starts_a_round() {
        let app = app(&["cat", "dog"], RoundConfig::new(3, 5, Difficulty::Hard));
        assert_eq!(app.get_candidates_count(), 2);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn bad_length_fails_to_start() {
        let manager = HangmanManager::new(["cat"]).unwrap();
        let result = App::new(manager, RoundConfig::new(7, 5, Difficulty::Hard));
        assert!(matches!(result, Err(HangmanError::NoWordsOfLength(7))));
    }

    #[test]
    fn guess_records_history() {
        let mut app = app(&["cat", "cap", "dog"], RoundConfig::new(3, 5, Difficulty::Hard));
        app.handle_guess('A');

        assert_eq!(app.history.len(), 1);
        let entry = &app.history[0];
        assert_eq!(entry.letter, 'a');
        assert_eq!(entry.pattern, "-a-");
        assert!(entry.hit);
        assert_eq!(entry.families, 2);
        assert_eq!(entry.candidates_before, 3);
        assert_eq!(entry.candidates_after, 2);
        assert_eq!(app.last_families.get("-a-"), Some(&2));
    }

    #[test]
    fn repeated_guess_is_rejected() {
        let mut app = app(&["cat", "cap"], RoundConfig::new(3, 5, Difficulty::Hard));
        app.handle_guess('a');
        app.handle_guess('a');
        assert_eq!(app.history.len(), 1);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut app = app(&["cat"], RoundConfig::new(3, 5, Difficulty::Hard));
        app.handle_guess('7');
        assert!(app.history.is_empty());
    }

    #[test]
    fn winning_ends_round_and_counts() {
        let mut app = app(&["ox"], RoundConfig::new(2, 3, Difficulty::Hard));
        app.handle_guess('o');
        app.handle_guess('x');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.answer.as_deref(), Some("ox"));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
    }

    #[test]
    fn losing_ends_round() {
        let mut app = app(&["ox"], RoundConfig::new(2, 1, Difficulty::Hard));
        app.handle_guess('z');

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.answer.as_deref(), Some("ox"));
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_resets_round() {
        let mut app = app(&["ox"], RoundConfig::new(2, 1, Difficulty::Hard));
        app.handle_guess('z');
        app.new_game();

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.history.is_empty());
        assert!(app.answer.is_none());
        assert_eq!(app.round().unwrap().wrong_guesses_left(), 1);
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = app(&["cat"], RoundConfig::new(3, 5, Difficulty::Hard));
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
