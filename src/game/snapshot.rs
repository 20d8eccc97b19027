//! Serialized game state
//!
//! The snapshot is a compact JSON object:
//!
//! ```text
//! {"answer":"CRANE","guesses":["SLATE"],"currentInput":"CR","invalidSubmit":false}
//! ```
//!
//! Persistence layers must treat the encoded string as opaque.

use crate::core::{HEIGHT, WIDTH, Word, WordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Plain record form of a game's persistent state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub answer: String,
    pub guesses: Vec<String>,
    #[serde(default)]
    pub current_input: String,
    #[serde(default)]
    pub invalid_submit: bool,
}

/// Reasons a snapshot cannot be restored
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid answer: {0}")]
    Answer(WordError),

    #[error("invalid guess #{index}: {source}")]
    Guess { index: usize, source: WordError },

    #[error("too many guesses: {0} (max 6)")]
    TooManyGuesses(usize),

    #[error("current input must be at most 5 letters: {0:?}")]
    CurrentInput(String),
}

/// Snapshot contents after validation, ready to install into a game
#[derive(Debug)]
pub(crate) struct Restored {
    pub answer: Word,
    pub guesses: Vec<Word>,
    pub current_input: String,
    pub invalid_submit: bool,
}

impl Snapshot {
    /// Parse an encoded snapshot
    ///
    /// # Errors
    /// Returns `SnapshotError::Json` if the text is not a snapshot object.
    pub fn parse(blob: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(blob)?)
    }

    /// Encode as compact JSON
    ///
    /// # Panics
    /// Will not panic - a struct of strings and a bool always serializes.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("snapshot serialization is infallible")
    }

    /// Check the snapshot against the board invariants
    pub(crate) fn validate(self) -> Result<Restored, SnapshotError> {
        let answer = Word::new(self.answer).map_err(SnapshotError::Answer)?;

        if self.guesses.len() > HEIGHT {
            return Err(SnapshotError::TooManyGuesses(self.guesses.len()));
        }

        let guesses = self
            .guesses
            .into_iter()
            .enumerate()
            .map(|(index, guess)| {
                Word::new(guess).map_err(|source| SnapshotError::Guess { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if self.current_input.len() > WIDTH
            || !self.current_input.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(SnapshotError::CurrentInput(self.current_input));
        }

        Ok(Restored {
            answer,
            guesses,
            current_input: self.current_input.to_ascii_uppercase(),
            invalid_submit: self.invalid_submit,
        })
    }
}
