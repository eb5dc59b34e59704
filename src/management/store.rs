use std::{
    collections::{BTreeMap, HashMap},
    fmt,
    io::Error,
    path::{Path, PathBuf},
};

use async_trait::async_trait;

use crate::config;

/// Key holding the review cursor.
pub const CURSOR_KEY: &str = "currentIndex";

const TRACK_KEY_PREFIX: &str = "song-";

/// Key holding the persisted genre of one track.
pub fn track_key(track_id: &str) -> String {
    format!("{TRACK_KEY_PREFIX}{track_id}")
}

/// True for `song-<id>` keys.
pub fn is_track_key(key: &str) -> bool {
    key.starts_with(TRACK_KEY_PREFIX)
}

/// Failure to read or write the progress store.
#[derive(Debug)]
pub enum StoreError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StoreError {
    fn from(err: Error) -> Self {
        StoreError::IoError(err)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::SerdeError(err)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::IoError(e) => write!(f, "store io error: {}", e),
            StoreError::SerdeError(e) => write!(f, "store format error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// String key-value persistence for review progress.
///
/// Reads are served from memory; writes are persisted before they return.
/// Two kinds of entries live here: `song-<track id>` holding a genre name and
/// [`CURSOR_KEY`] holding the review position.
///
/// # Implementations
///
/// - [`MemoryStore`] - in-memory, for tests
/// - [`JsonFileStore`] - one JSON object file under the local data dir
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Every stored key, in no particular order.
    fn keys(&self) -> Vec<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the change cannot be persisted. The
    /// in-memory view keeps the new value in that case.
    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the change cannot be persisted.
    async fn remove(&mut self, key: &str) -> Result<(), StoreError>;

    /// Deletes every key in `keys` as one change.
    ///
    /// # Returns
    ///
    /// The number of keys that were actually present.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the change cannot be persisted; nothing
    /// is written partially.
    async fn remove_many(&mut self, keys: &[String]) -> Result<usize, StoreError>;
}

/// In-memory store for tests and dry runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }

    async fn remove_many(&mut self, keys: &[String]) -> Result<usize, StoreError> {
        Ok(keys
            .iter()
            .filter(|k| self.entries.remove(k.as_str()).is_some())
            .count())
    }
}

/// Store backed by a single JSON object file, rewritten on every change.
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at the default location, `<data_dir>/store.json`.
    pub async fn open_default() -> Result<Self, StoreError> {
        Self::open(Self::default_path()).await
    }

    /// Opens the store at `path`.
    ///
    /// A missing or blank file yields an empty store; the file is created on
    /// the first write.
    ///
    /// # Errors
    ///
    /// - [`StoreError::IoError`] when the file exists but cannot be read
    /// - [`StoreError::SerdeError`] when it is not a JSON object of strings
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let entries = match async_fs::read_to_string(&path).await {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(StoreError::IoError(e)),
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn flush(&self) -> Result<(), StoreError> {
        Self::write_entries(&self.path, &self.entries).await
    }

    async fn write_entries(
        path: &Path,
        entries: &BTreeMap<String, String>,
    ) -> Result<(), StoreError> {
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(entries)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("store.json");
        path
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    async fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush().await
    }

    async fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if self.entries.remove(key).is_some() {
            self.flush().await?;
        }
        Ok(())
    }

    async fn remove_many(&mut self, keys: &[String]) -> Result<usize, StoreError> {
        let mut remaining = self.entries.clone();
        let removed = keys
            .iter()
            .filter(|k| remaining.remove(k.as_str()).is_some())
            .count();
        if removed == 0 {
            return Ok(0);
        }

        Self::write_entries(&self.path, &remaining).await?;
        self.entries = remaining;
        Ok(removed)
    }
}
