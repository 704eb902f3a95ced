//! Flat-file JSON persistence.
//!
//! A single file holds one JSON object mapping string ids to arbitrary JSON
//! values. Every operation reads and rewrites the whole file; there is no
//! caching, no locking, and no atomic replace. Concurrent writers race
//! (last writer wins).

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

/// Result type used across the store.
pub type StoreResult<T> = Result<T, StoreError>;

/// The full dataset: string ids mapping to caller-shaped JSON.
pub type Records = BTreeMap<String, Value>;

/// Store-level error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file could not be created or written.
    #[error("unable to access data file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An add targeted an id that is already present.
    #[error("item '{0}' already exists")]
    AlreadyExists(String),

    /// An update targeted an id that is not present.
    #[error("item '{0}' does not exist")]
    Missing(String),
}

impl StoreError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// JSON-file-backed key/value store.
///
/// The file location is fixed at construction; callers that want a different
/// location construct a different store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the data file holding an empty object if it does not exist.
    ///
    /// Unlike read failures, a creation failure is raised: a store that
    /// cannot create its file cannot do anything at all.
    fn ensure_file(&self) -> StoreResult<()> {
        if !self.path.exists() {
            fs::write(&self.path, "{}").map_err(|e| StoreError::io(&self.path, e))?;
        }
        Ok(())
    }

    /// Load the entire dataset.
    ///
    /// An unreadable or corrupt file is logged and treated as empty; the
    /// previous contents are lost on the next save.
    pub fn load(&self) -> StoreResult<Records> {
        self.ensure_file()?;
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read data file");
                return Ok(Records::new());
            }
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to parse data file");
                Ok(Records::new())
            }
        }
    }

    /// Serialize the dataset and overwrite the file.
    pub fn save(&self, records: &Records) -> StoreResult<()> {
        let body = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::io(&self.path, e.into()))?;
        fs::write(&self.path, body).map_err(|e| StoreError::io(&self.path, e))
    }

    /// All stored values.
    pub fn list(&self) -> StoreResult<Vec<Value>> {
        Ok(self.load()?.into_values().collect())
    }

    /// A single value by id, or `None` if absent.
    pub fn get(&self, item_id: &str) -> StoreResult<Option<Value>> {
        Ok(self.load()?.remove(item_id))
    }

    /// Insert a new item. Fails if the id is already present.
    pub fn add(&self, item_id: &str, item: Value) -> StoreResult<()> {
        let mut records = self.load()?;
        if records.contains_key(item_id) {
            return Err(StoreError::AlreadyExists(item_id.to_string()));
        }
        records.insert(item_id.to_string(), item);
        self.save(&records)
    }

    /// Replace an existing item. Fails if the id is absent.
    pub fn update(&self, item_id: &str, item: Value) -> StoreResult<()> {
        let mut records = self.load()?;
        if !records.contains_key(item_id) {
            return Err(StoreError::Missing(item_id.to_string()));
        }
        records.insert(item_id.to_string(), item);
        self.save(&records)
    }

    /// Remove an item. Does nothing if the id is absent.
    pub fn delete(&self, item_id: &str) -> StoreResult<()> {
        let mut records = self.load()?;
        if records.remove(item_id).is_some() {
            self.save(&records)?;
        }
        Ok(())
    }
}
