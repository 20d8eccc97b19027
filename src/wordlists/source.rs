//! Word validation and answer selection
//!
//! Games call into a [`WordValidator`] when a guess is submitted and sessions
//! draw answers from a [`WordSource`]. [`WordBank`] backs both with an
//! in-memory word list.

use super::loader::{load_from_file, words_from_slice};
use super::{ALLOWED, ANSWERS};
use crate::core::Word;
use async_trait::async_trait;
use rand::Rng;
use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

/// Failure of the validation capability itself (not a rejected word)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("validator unavailable: {0}")]
    Unavailable(String),
}

/// Errors raised while building a word bank
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("word list contains no valid answers")]
    EmptyAnswers,
}

/// Decides whether a submitted guess is an acceptable word
///
/// Implementations receive the guess exactly as the game holds it
/// (uppercase by convention) and must handle casing themselves.
#[async_trait]
pub trait WordValidator: Send + Sync {
    /// Returns `Ok(true)` if `word` may be played as a guess
    async fn validate_word(&self, word: &str) -> Result<bool, ValidationError>;
}

/// A validator that can also seed new games
pub trait WordSource: WordValidator {
    /// Draw a random answer
    fn random_word(&self) -> Word;
}

/// Adapts a synchronous predicate into a [`WordValidator`]
pub struct FnValidator<F>(pub F);

#[async_trait]
impl<F> WordValidator for FnValidator<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn validate_word(&self, word: &str) -> Result<bool, ValidationError> {
        Ok((self.0)(word))
    }
}

/// In-memory word list: answers to draw from plus the set of allowed guesses
#[derive(Debug, Clone)]
pub struct WordBank {
    answers: Vec<Word>,
    allowed: FxHashSet<String>,
}

impl WordBank {
    /// Build a bank from answer and allowed lists
    ///
    /// Answers are always accepted as guesses.
    ///
    /// # Errors
    /// Returns `WordListError::EmptyAnswers` if `answers` is empty.
    pub fn new(answers: Vec<Word>, allowed: &[Word]) -> Result<Self, WordListError> {
        if answers.is_empty() {
            return Err(WordListError::EmptyAnswers);
        }

        let allowed = allowed
            .iter()
            .chain(answers.iter())
            .map(|w| w.text().to_string())
            .collect();

        Ok(Self { answers, allowed })
    }

    /// Bank backed by the lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            answers: words_from_slice(ANSWERS),
            allowed: ALLOWED.iter().map(|w| w.to_uppercase()).collect(),
        }
    }

    /// Bank using a single custom list for both answers and allowed guesses
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or holds no valid words.
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let words = load_from_file(path).await?;
        Self::new(words.clone(), &words)
    }

    /// Check a candidate guess, case-insensitively
    #[must_use]
    pub fn is_valid_word(&self, word: &str) -> bool {
        Word::new(word).is_ok_and(|w| self.allowed.contains(w.text()))
    }

    #[must_use]
    pub fn answer_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn allowed_count(&self) -> usize {
        self.allowed.len()
    }
}

#[async_trait]
impl WordValidator for WordBank {
    async fn validate_word(&self, word: &str) -> Result<bool, ValidationError> {
        Ok(self.is_valid_word(word))
    }
}

impl WordSource for WordBank {
    fn random_word(&self) -> Word {
        let index = rand::rng().random_range(0..self.answers.len());
        self.answers[index].clone()
    }
}
