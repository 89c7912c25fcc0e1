//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the wrong-guess budget is left
#[must_use]
pub fn budget_bar(remaining: usize, max_wrong: usize, width: usize) -> String {
    create_progress_bar(remaining as f64, max_wrong as f64, width)
}

/// Guessed letters separated by spaces, or `(none)`
#[must_use]
pub fn format_guessed(guessed: &BTreeSet<char>) -> String {
    if guessed.is_empty() {
        return "(none)".to_string();
    }

    guessed
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
