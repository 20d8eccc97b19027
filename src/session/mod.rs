//! Request-scoped game sessions
//!
//! A session is a snapshot string stored under an opaque key. Each request
//! locks its key, restores the game (or starts a new round), applies one
//! action and writes the snapshot back before the lock is released.

mod error;
mod manager;
mod store;

pub use error::{Result, SessionError};
pub use manager::{Action, SessionView, Sessions};
pub use store::{FileStore, MemoryStore, SnapshotStore};
