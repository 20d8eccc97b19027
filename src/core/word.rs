//! Validated five-letter words
//!
//! Everything that reaches the board, as an answer or a guess, goes through
//! [`Word::new`]. The stored text is always uppercase.

use super::WIDTH;
use rustc_hash::FxHashSet;
use std::fmt;
use thiserror::Error;

/// An uppercase board word with a letter set for presence lookups
#[derive(Debug, Clone)]
pub struct Word {
    text: String,
    chars: [u8; WIDTH],
    letters: FxHashSet<u8>,
}

/// Why a string is not a playable word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("expected 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("word is not plain ASCII")]
    NonAscii,
    #[error("word may only contain the letters A-Z")]
    InvalidCharacters,
}

impl Word {
    /// Normalise `text` to uppercase and check it is five ASCII letters
    ///
    /// # Errors
    /// `NonAscii` is reported before `InvalidLength`, which is reported before
    /// `InvalidCharacters`.
    ///
    /// ```
    /// use wordle_game::core::{Word, WordError};
    ///
    /// assert_eq!(Word::new("Crane").unwrap().text(), "CRANE");
    /// assert_eq!(Word::new("cranes"), Err(WordError::InvalidLength(6)));
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        let bytes = text.as_bytes();
        if bytes.len() != WIDTH {
            return Err(WordError::InvalidLength(bytes.len()));
        }
        if !bytes.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        let mut chars = [0u8; WIDTH];
        chars.copy_from_slice(bytes);

        Ok(Self {
            letters: chars.iter().copied().collect(),
            chars,
            text,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WIDTH] {
        &self.chars
    }

    /// Letter at `position`, or `None` past the end
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        self.chars.get(position).copied().map(char::from)
    }

    /// Whether `letter` occurs anywhere in the word (case-sensitive)
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        u8::try_from(letter).is_ok_and(|b| self.letters.contains(&b))
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.chars == other.chars
    }
}

impl Eq for Word {}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
