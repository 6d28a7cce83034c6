//! Formatting utilities for terminal output

/// Gallows drawings, from empty to complete
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "=========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "=========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "=========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "=========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "=========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "=========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "=========="],
];

/// Gallows drawing for `wrong` misses out of a `max` budget
///
/// The budget is spread over the seven drawing stages, so any budget ends on
/// the complete figure.
#[must_use]
pub fn gallows(wrong: u32, max: u32) -> [&'static str; 6] {
    let last = GALLOWS.len() - 1;
    let stage = if max == 0 || wrong >= max {
        last
    } else {
        (wrong as usize * last) / max as usize
    };
    GALLOWS[stage]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage string with one decimal, e.g. `42.0%`
#[must_use]
pub fn percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}
