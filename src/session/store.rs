//! Snapshot persistence backends.

use super::error::{Result, SessionError};
use async_trait::async_trait;
use rustc_hash::FxHashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key/value storage for encoded game snapshots
///
/// Stores never interpret the snapshot; they hand back exactly what was saved.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Load the snapshot saved under `key`, if any
    async fn load(&self, key: &str) -> Result<Option<String>>;

    /// Save (or overwrite) the snapshot under `key`
    async fn save(&self, key: &str, snapshot: &str) -> Result<()>;

    /// Forget `key`; removing an absent key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}

/// Process-local store, mostly for tests and the interactive front-ends
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<FxHashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions
    ///
    /// # Errors
    /// Returns `SessionError::LockPoisoned` if a writer panicked.
    pub fn len(&self) -> Result<usize> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| SessionError::LockPoisoned)?
            .len())
    }

    /// # Errors
    /// Returns `SessionError::LockPoisoned` if a writer panicked.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().map_err(|_| SessionError::LockPoisoned)?;
        Ok(entries.get(key).cloned())
    }

    async fn save(&self, key: &str, snapshot: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::LockPoisoned)?;
        entries.insert(key.to_string(), snapshot.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.lock().map_err(|_| SessionError::LockPoisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per session inside a directory
///
/// Writes go to a temporary file that is renamed over the target, so a
/// reader never observes a half-written snapshot.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key.len() <= 64
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(self.dir.join(format!("{key}.json")))
        } else {
            Err(SessionError::InvalidKey(key.to_string()))
        }
    }
}

#[async_trait]
impl SnapshotStore for FileStore {
    async fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, key: &str, snapshot: &str) -> Result<()> {
        let path = self.path_for(key)?;
        tokio::fs::create_dir_all(&self.dir).await?;

        let tmp = path.with_extension("json.tmp");
        tokio::fs::write(&tmp, snapshot).await?;
        tokio::fs::rename(&tmp, &path).await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match tokio::fs::remove_file(&path).await {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(err.into()),
            _ => Ok(()),
        }
    }
}
