//! Text Storage Backend
//!
//! One file per key, named exactly as the key, directly inside the
//! namespace directory.

use serde_json::Value;
use std::fs;
use std::path::{is_separator, Path, PathBuf};

use super::traits::{BackendKind, StorageBackend};
use crate::store::errors::{StoreError, StoreResult};
use crate::store::fs_ops;
use crate::store::namespace::NamespaceDir;
use crate::store::value::coerce_to_string;

/// File-per-key backend
///
/// Values are stored as their string form and always read back as strings.
/// Writes truncate in place; a crash mid-write can leave a partial file.
#[derive(Debug)]
pub struct TextBackend {
    storage_path: PathBuf,
}

impl TextBackend {
    /// Create a text backend over a resolved namespace
    pub fn new(namespace: &NamespaceDir) -> Self {
        Self {
            storage_path: namespace.path().to_path_buf(),
        }
    }

    /// Namespace directory holding the key files
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    /// Convert a key to its file path
    ///
    /// Keys containing a path separator or starting with `.` are rejected so
    /// that a key can neither escape the namespace nor alias a hidden file.
    pub fn file_path(&self, key: &str) -> StoreResult<PathBuf> {
        if key.chars().any(is_separator) || key.starts_with('.') {
            return Err(StoreError::invalid_key(key));
        }
        Ok(self.storage_path.join(key))
    }
}

impl StorageBackend for TextBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Text
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let path = self.file_path(key)?;
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        Ok(Some(Value::String(content)))
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        let path = self.file_path(key)?;
        fs::write(&path, coerce_to_string(&value))?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let path = self.file_path(key)?;
        if path.is_file() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        if self.storage_path.is_dir() {
            fs_ops::remove_tree(&self.storage_path)?;
        }
        fs::create_dir_all(&self.storage_path)?;
        tracing::info!(path = %self.storage_path.display(), "cleared text store");
        Ok(())
    }

    fn physical_path(&self) -> Option<PathBuf> {
        Some(self.storage_path.clone())
    }
}
