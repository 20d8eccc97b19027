//! Reading word lists from text
//!
//! One word per line. Blank lines and entries that are not five letters are
//! skipped rather than rejected, so hand-edited lists stay usable.

use crate::core::Word;
use std::io;
use std::path::Path;

/// Read and parse a word list file
///
/// # Errors
///
/// Returns the underlying I/O error if the file cannot be read.
///
/// ```no_run
/// # async fn demo() -> std::io::Result<()> {
/// let words = wordle_game::wordlists::loader::load_from_file("data/answers.txt").await?;
/// assert!(!words.is_empty());
/// # Ok(())
/// # }
/// ```
pub async fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(parse_words(&content))
}

/// Parse newline-separated words, dropping anything that is not a word
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Words from a compiled-in list such as [`ANSWERS`](crate::wordlists::ANSWERS)
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
