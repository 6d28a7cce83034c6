//! Simulation command
//!
//! Pits an automated guesser against the host over many rounds and collects
//! win statistics. Rounds are independent and run in parallel.

use super::RoundConfig;
use crate::core::{Difficulty, Word};
use crate::dictionary::Dictionary;
use crate::error::HangmanError;
use crate::game::RoundState;
use crate::solver::{Solver, Strategy, StrategyType};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::{BTreeMap, BTreeSet};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Configuration for a simulation run
pub struct SimulateConfig {
    pub games: usize,
    pub word_lengths: Vec<usize>,
    pub max_wrong_guesses: u32,
    pub difficulty: Difficulty,
    pub strategy: StrategyType,
    pub show_progress: bool,
}

/// Outcome of one automated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub word_length: usize,
    pub won: bool,
    pub guesses: Vec<char>,
    pub wrong_guesses: u32,
    pub secret_word: String,
}

/// Per-length aggregate
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LengthStats {
    pub games: usize,
    pub wins: usize,
    pub total_wrong_guesses: u64,
}

impl LengthStats {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub strategy: &'static str,
    pub difficulty: Difficulty,
    pub total_games: usize,
    pub wins: usize,
    pub per_length: BTreeMap<usize, LengthStats>,
    pub hardest_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.wins as f64 / self.total_games as f64
        }
    }
}

/// Play one round with an automated guesser until it is solved or lost
///
/// # Errors
///
/// Returns an error if the round cannot start.
pub fn play_automated<S: Strategy>(
    dictionary: &Dictionary,
    config: RoundConfig,
    solver: &Solver<S>,
) -> Result<GameRecord, HangmanError> {
    let mut round = RoundState::new(
        dictionary,
        config.word_length,
        config.max_wrong_guesses,
        config.difficulty,
    )?;
    let mut guessed: BTreeSet<char> = BTreeSet::new();
    let mut guesses = Vec::new();

    while !round.is_solved() && !round.is_lost() {
        let Some(letter) = solver.next_letter(round.pattern(), &guessed) else {
            break;
        };
        round.make_guess(letter)?;
        guessed.insert(letter);
        guesses.push(letter);
    }

    let secret_word = round.resolve_secret_word().map(Word::to_string)?;
    debug!(
        word_length = config.word_length,
        won = round.is_solved(),
        guesses = guesses.len(),
        %secret_word,
        "simulated round finished"
    );

    Ok(GameRecord {
        word_length: config.word_length,
        won: round.is_solved(),
        guesses,
        wrong_guesses: config.max_wrong_guesses - round.wrong_guesses_left(),
        secret_word,
    })
}

/// Run `config.games` rounds, cycling through the configured word lengths
///
/// Lengths with no dictionary words are skipped.
///
/// # Errors
///
/// Returns `HangmanError::NoWordsOfLength` if none of the lengths is playable.
pub fn run_simulation(
    dictionary: &Dictionary,
    config: &SimulateConfig,
) -> Result<SimulationResult, HangmanError> {
    let lengths: Vec<usize> = config
        .word_lengths
        .iter()
        .copied()
        .filter(|&length| dictionary.count_by_length(length) > 0)
        .collect();

    let Some(&first_length) = config.word_lengths.first() else {
        return Err(HangmanError::NoWordsOfLength(0));
    };
    if lengths.is_empty() {
        return Err(HangmanError::NoWordsOfLength(first_length));
    }

    info!(
        games = config.games,
        lengths = ?lengths,
        strategy = config.strategy.name(),
        difficulty = %config.difficulty,
        "simulation started"
    );

    let pb = if config.show_progress {
        ProgressBar::new(config.games as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records: Vec<GameRecord> = (0..config.games)
        .into_par_iter()
        .map(|game| {
            let word_length = lengths[game % lengths.len()];
            let solver = Solver::new(config.strategy, dictionary.words_of_length(word_length));
            let round_config =
                RoundConfig::new(word_length, config.max_wrong_guesses, config.difficulty);
            let record = play_automated(dictionary, round_config, &solver);
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut per_length: BTreeMap<usize, LengthStats> = BTreeMap::new();
    let mut lost_words: BTreeMap<String, usize> = BTreeMap::new();
    for record in &records {
        let stats = per_length.entry(record.word_length).or_default();
        stats.games += 1;
        stats.total_wrong_guesses += u64::from(record.wrong_guesses);
        if record.won {
            stats.wins += 1;
        } else {
            *lost_words.entry(record.secret_word.clone()).or_insert(0) += 1;
        }
    }

    let mut hardest_words: Vec<(String, usize)> = lost_words.into_iter().collect();
    hardest_words.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    hardest_words.truncate(10);

    let wins = records.iter().filter(|r| r.won).count();

    Ok(SimulationResult {
        strategy: config.strategy.name(),
        difficulty: config.difficulty,
        total_games: records.len(),
        wins,
        per_length,
        hardest_words,
        duration,
        games_per_second: records.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::FrequencyStrategy;

    fn dictionary() -> Dictionary {
        Dictionary::new([
            "cat", "cap", "car", "dog", "dot", "bib", "ox", "at", "bird", "fish",
        ])
        .unwrap()
    }

    #[test]
    fn automated_round_ends() {
        let dictionary = dictionary();
        let words = dictionary.filter_by_length(3);
        let solver = Solver::new(FrequencyStrategy, &words);

        let record =
            play_automated(&dictionary, RoundConfig::new(3, 10, Difficulty::Hard), &solver)
                .unwrap();

        assert_eq!(record.word_length, 3);
        assert!(record.won);
        assert!(record.wrong_guesses < 10);
        assert_eq!(record.secret_word.chars().count(), 3);
        let unique: BTreeSet<char> = record.guesses.iter().copied().collect();
        assert_eq!(unique.len(), record.guesses.len());
    }

    #[test]
    fn tiny_budget_loses() {
        let dictionary = dictionary();
        let words = dictionary.filter_by_length(3);
        let solver = Solver::new(FrequencyStrategy, &words);

        let record =
            play_automated(&dictionary, RoundConfig::new(3, 1, Difficulty::Hard), &solver)
                .unwrap();
        assert!(!record.won);
        assert_eq!(record.wrong_guesses, 1);
    }

    #[test]
    fn hard_frequency_rounds_are_reproducible() {
        let dictionary = dictionary();
        let words = dictionary.filter_by_length(3);
        let solver = Solver::new(FrequencyStrategy, &words);
        let config = RoundConfig::new(3, 4, Difficulty::Hard);

        let first = play_automated(&dictionary, config, &solver).unwrap();
        let second = play_automated(&dictionary, config, &solver).unwrap();
        assert_eq!(first.guesses, second.guesses);
        assert_eq!(first.won, second.won);
    }

    #[test]
    fn simulation_aggregates_by_length() {
        let config = SimulateConfig {
            games: 12,
            word_lengths: vec![2, 3, 4, 9],
            max_wrong_guesses: 6,
            difficulty: Difficulty::Medium,
            strategy: StrategyType::from_name("frequency"),
            show_progress: false,
        };
        let result = run_simulation(&dictionary(), &config).unwrap();

        assert_eq!(result.total_games, 12);
        assert_eq!(result.per_length.len(), 3);
        assert_eq!(result.per_length[&2].games, 4);
        assert!(!result.per_length.contains_key(&9));
        assert!(result.wins <= result.total_games);
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn simulation_without_playable_length_fails() {
        let config = SimulateConfig {
            games: 3,
            word_lengths: vec![9],
            max_wrong_guesses: 6,
            difficulty: Difficulty::Hard,
            strategy: StrategyType::from_name("random"),
            show_progress: false,
        };
        assert_eq!(
            run_simulation(&dictionary(), &config).unwrap_err(),
            HangmanError::NoWordsOfLength(9)
        );
    }
}
