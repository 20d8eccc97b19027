//! Engine configuration

use std::time::Duration;

/// Tunables shared by every game a process creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Upper bound on a single word-validation call; expiry rejects the guess
    pub validation_timeout: Duration,
}

impl EngineConfig {
    pub const DEFAULT_VALIDATION_TIMEOUT: Duration = Duration::from_secs(2);

    #[must_use]
    pub const fn with_validation_timeout(mut self, timeout: Duration) -> Self {
        self.validation_timeout = timeout;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            validation_timeout: Self::DEFAULT_VALIDATION_TIMEOUT,
        }
    }
}
