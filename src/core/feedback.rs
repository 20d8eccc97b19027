//! Per-letter feedback states and how they are derived
//!
//! Feedback here is positional and intentionally simple: a letter is
//! `Correct` when it sits at the same position in the answer, `CorrectLetter`
//! when it appears anywhere else in the answer, and `Incorrect` otherwise.
//! Duplicate letters are not counted against each other.

use super::Word;
use serde::{Deserialize, Serialize};

/// Feedback state of a single cell or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterState {
    /// Row not yet reached, or the active row of a finished game
    Unanswered,
    /// Letter is not in the answer
    Incorrect,
    /// Row currently being typed
    ActiveRow,
    /// Letter is in the answer at this position
    Correct,
    /// Letter is in the answer at another position
    CorrectLetter,
}

impl LetterState {
    /// Precedence used when folding feedback for the keyboard
    ///
    /// Only the three answered states rank; the row markers never appear there.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Correct => 3,
            Self::CorrectLetter => 2,
            Self::Incorrect => 1,
            Self::Unanswered | Self::ActiveRow => 0,
        }
    }

    /// Emoji square for share text
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::CorrectLetter => '🟨',
            _ => '⬜',
        }
    }
}

/// Feedback for `letter` placed at `position` against `answer`
///
/// An empty cell (`None`) is always `Incorrect`.
///
/// # Examples
/// ```
/// use wordle_game::core::{LetterState, Word, letter_feedback};
///
/// let answer = Word::new("crane").unwrap();
/// assert_eq!(letter_feedback(&answer, Some('E'), 4), LetterState::Correct);
/// assert_eq!(letter_feedback(&answer, Some('A'), 0), LetterState::CorrectLetter);
/// assert_eq!(letter_feedback(&answer, Some('Z'), 0), LetterState::Incorrect);
/// ```
#[must_use]
pub fn letter_feedback(answer: &Word, letter: Option<char>, position: usize) -> LetterState {
    let Some(letter) = letter else {
        return LetterState::Incorrect;
    };

    if answer.char_at(position) == Some(letter) {
        LetterState::Correct
    } else if answer.has_letter(letter) {
        LetterState::CorrectLetter
    } else {
        LetterState::Incorrect
    }
}

/// Positional feedback for every letter of `guess`
#[must_use]
pub fn row_feedback(answer: &Word, guess: &Word) -> [LetterState; super::WIDTH] {
    let mut result = [LetterState::Incorrect; super::WIDTH];
    for (i, slot) in result.iter_mut().enumerate() {
        *slot = letter_feedback(answer, guess.char_at(i), i);
    }
    result
}

/// Convert a row of feedback to an emoji string like "🟩🟨⬜🟩🟨"
#[must_use]
pub fn to_emoji(row: &[LetterState]) -> String {
    row.iter().map(|state| state.to_emoji()).collect()
}
