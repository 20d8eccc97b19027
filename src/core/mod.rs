//! Core domain types for Wordle
//!
//! Board dimensions, the validated `Word` type and per-letter feedback.
//! Everything here is pure and free of I/O.

mod feedback;
mod word;

pub use feedback::{LetterState, letter_feedback, row_feedback, to_emoji};
pub use word::{Word, WordError};

/// Number of letters in every word
pub const WIDTH: usize = 5;

/// Maximum number of guesses per game
pub const HEIGHT: usize = 6;
