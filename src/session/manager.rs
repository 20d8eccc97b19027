//! Per-key read-modify-write of game sessions.

use super::error::{Result, SessionError};
use super::store::SnapshotStore;
use crate::game::{EngineConfig, FinishedState, Game, Grid, KeyCap, SubmitOutcome};
use crate::wordlists::{WordSource, WordValidator};
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

/// One player request against a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Type a letter; non-alphabetic keys are ignored
    PressKey(char),
    Backspace,
    Submit,
    /// Discard the stored game and draw a new answer
    NewGame,
    /// Read the board without changing it
    View,
}

/// Everything a renderer needs after a request
#[derive(Debug, Clone)]
pub struct SessionView {
    pub grid: Grid,
    pub keyboard: Vec<Vec<KeyCap>>,
    pub finished: Option<FinishedState>,
    pub invalid_submit: bool,
    pub current_row: usize,
    pub share_text: Option<String>,
    /// Set for `Action::Submit` only
    pub submit: Option<SubmitOutcome>,
    /// The answer, revealed once the game is over
    pub answer: Option<String>,
}

impl SessionView {
    fn from_game(game: &Game, submit: Option<SubmitOutcome>) -> Self {
        let finished = game.finished_state();
        Self {
            grid: game.grid(),
            keyboard: game.keyboard(),
            finished,
            invalid_submit: game.invalid_submit(),
            current_row: game.current_row(),
            share_text: game.share_text(),
            submit,
            answer: finished
                .and(game.answer())
                .map(|answer| answer.text().to_string()),
        }
    }
}

type KeyLock = Arc<tokio::sync::Mutex<()>>;
type LockTable = Mutex<FxHashMap<String, KeyLock>>;

/// A request's claim on a key's lock entry
///
/// Dropping the lease, including when the request future is cancelled,
/// removes the entry once no other request holds it.
struct KeyLease<'a> {
    table: &'a LockTable,
    key: &'a str,
    lock: KeyLock,
}

impl<'a> KeyLease<'a> {
    fn acquire(table: &'a LockTable, key: &'a str) -> Result<Self> {
        let mut locks = table.lock().map_err(|_| SessionError::LockPoisoned)?;
        let lock = Arc::clone(locks.entry(key.to_string()).or_default());
        Ok(Self { table, key, lock })
    }
}

impl Drop for KeyLease<'_> {
    fn drop(&mut self) {
        let Ok(mut locks) = self.table.lock() else {
            warn!(session = self.key, "lock table poisoned, leaving entry");
            return;
        };
        // The table's copy plus this lease
        if locks
            .get(self.key)
            .is_some_and(|lock| Arc::ptr_eq(lock, &self.lock) && Arc::strong_count(lock) == 2)
        {
            locks.remove(self.key);
        }
    }
}

/// Serializes requests per session key over a snapshot store
///
/// Requests for the same key run one at a time, so two concurrent requests
/// can never both restore the same stale snapshot. Different keys proceed
/// independently.
pub struct Sessions<S, W> {
    store: S,
    words: Arc<W>,
    config: EngineConfig,
    locks: LockTable,
}

impl<S, W> Sessions<S, W>
where
    S: SnapshotStore,
    W: WordSource + 'static,
{
    pub fn new(store: S, words: Arc<W>, config: EngineConfig) -> Self {
        Self {
            store,
            words,
            config,
            locks: Mutex::new(FxHashMap::default()),
        }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply `action` to the session stored under `key`
    ///
    /// A missing or unusable snapshot starts a new round with a random answer.
    ///
    /// # Errors
    /// Returns an error if the store fails or the key is rejected by it.
    pub async fn apply(&self, key: &str, action: Action) -> Result<SessionView> {
        let lease = KeyLease::acquire(&self.locks, key)?;
        let _guard = lease.lock.lock().await;
        self.apply_locked(key, action).await
    }

    async fn apply_locked(&self, key: &str, action: Action) -> Result<SessionView> {
        let validator: Arc<dyn WordValidator> = self.words.clone();
        let mut game = Game::with_config(validator, self.config);

        let stored = if action == Action::NewGame {
            self.store.remove(key).await?;
            None
        } else {
            self.store.load(key).await?
        };

        let restored = stored.as_deref().is_some_and(|blob| game.decode(blob));
        if !restored {
            game.initialize(self.words.random_word());
            info!(session = key, "started new game");
        }

        let before = game.encode();
        let submit = match action {
            Action::PressKey(letter) => {
                game.add_letter(letter);
                None
            }
            Action::Backspace => {
                game.backspace();
                None
            }
            Action::Submit => Some(game.submit().await),
            Action::NewGame | Action::View => None,
        };

        debug!(session = key, ?action, ?submit, "applied action");

        // A finished round is reported once, then forgotten
        if let Some(finished) = game.finished_state() {
            info!(session = key, result = %finished, guesses = game.current_row(), "game over");
            self.store.remove(key).await?;
        } else {
            let after = game.encode();
            if !restored || after != before {
                self.store.save(key, &after).await?;
            }
        }

        Ok(SessionView::from_game(&game, submit))
    }

    /// Number of keys with a request in flight
    ///
    /// # Errors
    /// Returns `SessionError::LockPoisoned` if a request panicked mid-update.
    pub fn active_keys(&self) -> Result<usize> {
        Ok(self
            .locks
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .len())
    }
}
