//! Formatting utilities for terminal output

use crate::core::LetterState;
use crate::game::{Cell, FinishedState, KeyCap};
use colored::{ColoredString, Colorize};

/// Render one board cell as a padded, coloured tile like " A "
#[must_use]
pub fn cell_tile(cell: &Cell) -> ColoredString {
    let text = format!(" {} ", cell.letter.unwrap_or(' '));
    paint(&text, Some(cell.state))
}

/// Render one keyboard key
#[must_use]
pub fn key_tile(key: &KeyCap) -> ColoredString {
    let text = format!(" {} ", key.letter);
    match key.state {
        Some(LetterState::Incorrect) => text.bright_black(),
        state => paint(&text, state),
    }
}

fn paint(text: &str, state: Option<LetterState>) -> ColoredString {
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::CorrectLetter) => text.black().on_yellow().bold(),
        Some(LetterState::ActiveRow) => text.white().on_bright_black().bold(),
        Some(LetterState::Incorrect) => text.white().on_black(),
        Some(LetterState::Unanswered) | None => text.white(),
    }
}

/// Banner shown above the board, if any
#[must_use]
pub fn status_banner(finished: Option<FinishedState>, invalid_submit: bool) -> Option<String> {
    match finished {
        Some(state) => Some(state.to_string().to_uppercase()),
        None if invalid_submit => Some("Word not in word list".to_string()),
        None => None,
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
