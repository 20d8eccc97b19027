//! The game engine
//!
//! [`Game`] owns the answer, submitted guesses and the row being typed. It
//! enforces guess legality, derives feedback, projects the board for
//! renderers and round-trips through an opaque snapshot string.

mod config;
mod engine;
mod events;
mod snapshot;
mod view;

pub use config::EngineConfig;
pub use engine::{FinishedState, Game, SubmitOutcome};
pub use events::{GameEvent, SubscriptionId};
pub use snapshot::{Snapshot, SnapshotError};
pub use view::{Cell, Grid, KEY_ROWS, KeyCap};
