//! Change notification for games
//!
//! Listeners are plain callbacks kept in registration order and invoked
//! synchronously on the thread that mutated the game.

use super::Game;

/// Events emitted after a state-affecting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    /// State was (re)initialised or restored from a snapshot
    Init,
    /// An edit or accepted guess changed the state
    Change,
}

impl GameEvent {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Change => "change",
        }
    }
}

/// Handle returned by [`Game::subscribe`]; pass it to [`Game::unsubscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub(crate) type Listener = Box<dyn FnMut(GameEvent, &Game) + Send>;

#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    pub(crate) fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, listener));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn emit(&mut self, event: GameEvent, game: &Game) {
        for (_, listener) in &mut self.entries {
            listener(event, game);
        }
    }
}
