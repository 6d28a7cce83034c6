//! Display functions for command results

use super::formatters::{create_progress_bar, percent};
use crate::commands::{DictionaryStats, ReplayResult, SimulationResult};
use crate::game::FamilySizes;
use colored::Colorize;

/// Families largest first, ties by pattern
fn ranked_families(families: &FamilySizes) -> Vec<(&str, usize)> {
    let mut ranked: Vec<(&str, usize)> = families
        .iter()
        .map(|(pattern, &size)| (pattern.as_str(), size))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked
}

/// Print the result of replaying a letter sequence
pub fn print_replay_result(result: &ReplayResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Replay: {} letters, {} wrong guesses, {}",
        result.config.word_length,
        result.config.max_wrong_guesses,
        result.config.difficulty.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let verdict = if step.hit { "hit".green() } else { "miss".red() };
        println!(
            "\nGuess {}: {} ({verdict}) → {}",
            i + 1,
            step.letter.to_string().to_uppercase().bold(),
            step.pattern_after.bright_white()
        );
        println!(
            "  Candidates: {} → {}   Wrong guesses left: {}",
            step.candidates_before, step.candidates_after, step.wrong_guesses_left
        );

        let families = ranked_families(&step.families);
        let largest = families.first().map_or(0, |&(_, size)| size);
        for &(pattern, size) in families.iter().take(8) {
            let bar = create_progress_bar(size as f64, largest as f64, 20);
            let marker = if pattern == step.pattern_after {
                "◀".bright_yellow()
            } else {
                " ".normal()
            };
            println!("    {pattern}  {} {size:5} {marker}", bar.cyan());
        }
        if families.len() > 8 {
            println!("    … {} more families", families.len() - 8);
        }
    }

    println!();
    if result.solved {
        println!(
            "{}",
            format!("✅ Word revealed: {}", result.secret_word).green().bold()
        );
    } else if result.lost {
        println!(
            "{}",
            format!("❌ Out of guesses. The word was {}", result.secret_word)
                .red()
                .bold()
        );
    } else {
        println!(
            "Round still open. The host would settle on {}",
            result.secret_word.bright_yellow()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Strategy:         {}", result.strategy);
    println!("   Difficulty:       {}", result.difficulty);
    println!("   Games played:     {}", result.total_games);
    println!(
        "   Guesser wins:     {} ({})",
        result.wins,
        percent(result.win_rate()).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    println!("\n📈 {}", "By word length:".bright_cyan().bold());
    for (length, stats) in &result.per_length {
        let bar = create_progress_bar(stats.win_rate(), 1.0, 30);
        let avg_wrong = if stats.games == 0 {
            0.0
        } else {
            stats.total_wrong_guesses as f64 / stats.games as f64
        };
        println!(
            "   {length:2}: {} {:>6}  ({} games, {avg_wrong:.1} misses avg)",
            bar.green(),
            percent(stats.win_rate()),
            stats.games
        );
    }

    if !result.hardest_words.is_empty() {
        println!("\n💀 {}", "Words the host won with most:".bright_cyan().bold());
        for (word, count) in &result.hardest_words {
            println!("   {:<12} {count}", word.bright_white());
        }
    }
}

/// Print dictionary statistics
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {} words in total", stats.total_words);

    let largest = stats.by_length.values().copied().max().unwrap_or(0);
    for (length, &count) in &stats.by_length {
        let bar = create_progress_bar(count as f64, largest as f64, 30);
        println!("   {length:2}: {} {count}", bar.green());
    }

    println!(
        "\n🔤 {} ({} candidates of length {})",
        "Opening letters".bright_cyan().bold(),
        stats.candidates,
        stats.word_length
    );
    if stats.opening_letters.is_empty() {
        println!("   No words of that length.");
        return;
    }
    println!("   letter  host keeps  families");
    for opening in stats.opening_letters.iter().take(10) {
        println!(
            "   {:>6}  {:>10}  {:>8}",
            opening.letter.to_string().bright_yellow(),
            opening.largest_family,
            opening.families
        );
    }
}
