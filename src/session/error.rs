//! Error types raised by the session layer.

use thiserror::Error;

/// Errors surfaced by snapshot stores and the session manager.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid session key: {0:?}")]
    InvalidKey(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
