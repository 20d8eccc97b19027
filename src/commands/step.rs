//! One-shot session command
//!
//! Applies a single action to a game persisted on disk, then prints the board.
//! Repeated invocations with the same session name continue the same game.

use crate::game::{EngineConfig, SubmitOutcome};
use crate::output::print_session_view;
use crate::session::{Action, FileStore, SessionView, Sessions};
use crate::wordlists::WordBank;
use std::path::PathBuf;
use std::sync::Arc;

/// Where and how to run a step
#[derive(Debug, Clone)]
pub struct StepConfig {
    pub store_dir: PathBuf,
    pub session: String,
    pub engine: EngineConfig,
}

/// Parse a single-letter key argument
#[must_use]
pub fn parse_key(input: &str) -> Option<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Some(c),
        _ => None,
    }
}

/// Apply `action` to the stored session and return the resulting view
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn step_session(
    config: &StepConfig,
    words: Arc<WordBank>,
    action: Action,
) -> Result<SessionView, String> {
    let sessions = Sessions::new(
        FileStore::new(config.store_dir.clone()),
        words,
        config.engine,
    );
    sessions
        .apply(&config.session, action)
        .await
        .map_err(|e| e.to_string())
}

/// Apply `action` and print the board
///
/// # Errors
///
/// Returns an error if the session store cannot be read or written.
pub async fn run_step(
    config: &StepConfig,
    words: Arc<WordBank>,
    action: Action,
) -> Result<(), String> {
    let view = step_session(config, words, action).await?;

    match view.submit {
        Some(SubmitOutcome::Ignored) => println!("Not enough letters"),
        Some(SubmitOutcome::Rejected) => println!("Word not in word list"),
        Some(SubmitOutcome::Accepted) | None => {}
    }
    print_session_view(&view);
    Ok(())
}
