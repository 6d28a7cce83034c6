//! Evil Hangman - CLI
//!
//! Hangman against a host that keeps its options open, with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use evil_hangman::{
    HangmanManager,
    commands::{RoundConfig, SimulateConfig, dictionary_stats, replay_letters, run_simple, run_simulation},
    core::Difficulty,
    dictionary::{Dictionary, loader::load_from_file},
    output::{print_dictionary_stats, print_replay_result, print_simulation_result},
    solver::StrategyType,
};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman where the host dodges your guesses by never committing to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'all' (default, embedded list) or path to a file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    dictionary: String,

    /// How ruthlessly the host picks word families
    #[arg(short, long, global = true, value_enum, default_value = "hard")]
    difficulty: Difficulty,

    /// Word length
    #[arg(short, long, global = true, default_value = "5")]
    length: usize,

    /// Number of wrong guesses allowed
    #[arg(short, long, global = true, default_value = "8")]
    guesses: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Replay a sequence of guesses and show every family split
    Replay {
        /// Letters to guess, in order (e.g. "etaoin")
        letters: String,
    },

    /// Let an automated guesser play many rounds against the host
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Guessing strategy: frequency (default), random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Comma-separated word lengths to cycle through (default: --length)
        #[arg(long, value_delimiter = ',')]
        lengths: Vec<usize>,
    },

    /// Word counts per length and the best opening letters
    Stats,
}

/// Load the dictionary based on the -w flag
///
/// - "all": the word list compiled into the binary
/// - "<path>": one word per line from a file
fn load_dictionary(mode: &str) -> Result<Dictionary> {
    let dictionary = match mode {
        "all" => Dictionary::embedded()?,
        path => {
            let words =
                load_from_file(path).with_context(|| format!("cannot read dictionary {path}"))?;
            Dictionary::new(words).with_context(|| format!("no usable words in {path}"))?
        }
    };
    info!(words = dictionary.len(), source = mode, "dictionary loaded");
    Ok(dictionary)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so its logs go to a file
    if matches!(command, Commands::Play) {
        evil_hangman::interactive::init_file_logging()?;
    } else {
        init_logging();
    }

    let dictionary = load_dictionary(&cli.dictionary)?;
    let config = RoundConfig::new(cli.length, cli.guesses, cli.difficulty);

    match command {
        Commands::Play => run_play_command(dictionary, config),
        Commands::Simple => run_simple_command(dictionary, config),
        Commands::Replay { letters } => run_replay_command(dictionary, config, &letters),
        Commands::Simulate {
            count,
            strategy,
            lengths,
        } => run_simulate_command(&dictionary, config, count, &strategy, lengths),
        Commands::Stats => {
            print_dictionary_stats(&dictionary_stats(&dictionary, config.word_length));
            Ok(())
        }
    }
}

fn run_play_command(dictionary: Dictionary, config: RoundConfig) -> Result<()> {
    use evil_hangman::interactive::{App, run_tui};

    let app = App::new(HangmanManager::with_dictionary(dictionary), config)
        .with_context(|| format!("cannot start a {}-letter round", config.word_length))?;
    run_tui(app)
}

fn run_simple_command(dictionary: Dictionary, config: RoundConfig) -> Result<()> {
    let mut manager = HangmanManager::with_dictionary(dictionary);
    let stdin = io::stdin();
    run_simple(&mut manager, config, &mut stdin.lock(), &mut io::stdout())
}

fn run_replay_command(dictionary: Dictionary, config: RoundConfig, letters: &str) -> Result<()> {
    let mut manager = HangmanManager::with_dictionary(dictionary);
    let result = replay_letters(&mut manager, config, letters)?;
    print_replay_result(&result);
    Ok(())
}

fn run_simulate_command(
    dictionary: &Dictionary,
    config: RoundConfig,
    count: usize,
    strategy_name: &str,
    lengths: Vec<usize>,
) -> Result<()> {
    let word_lengths = if lengths.is_empty() {
        vec![config.word_length]
    } else {
        lengths
    };

    println!(
        "Simulating {count} rounds with the {strategy_name} guesser on {} difficulty...",
        config.difficulty
    );

    let simulate = SimulateConfig {
        games: count,
        word_lengths,
        max_wrong_guesses: config.max_wrong_guesses,
        difficulty: config.difficulty,
        strategy: StrategyType::from_name(strategy_name),
        show_progress: true,
    };
    let result = run_simulation(dictionary, &simulate)?;
    print_simulation_result(&result);
    Ok(())
}
