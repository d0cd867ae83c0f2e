//! JSON Document Storage Backend
//!
//! The whole key space lives in `<namespace>.json` as a single object and is
//! mirrored in memory. Every mutation rewrites the full document before
//! returning.

use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::traits::{BackendKind, StorageBackend};
use crate::store::errors::StoreResult;
use crate::store::namespace::NamespaceDir;

/// Single-document backend
#[derive(Debug)]
pub struct JsonBackend {
    json_path: PathBuf,
    json_data: Map<String, Value>,
}

impl JsonBackend {
    /// Open (or initialize) the namespace document.
    ///
    /// A missing document is created empty. A document that is not a valid
    /// JSON object is treated as corrupted: the mapping is reset and the empty
    /// state is written over it.
    pub fn open(namespace: &NamespaceDir) -> StoreResult<Self> {
        let json_path = namespace.file_with_extension("json");
        let mut backend = Self {
            json_path,
            json_data: Map::new(),
        };

        if !backend.json_path.is_file() {
            backend.commit_to_disk()?;
            return Ok(backend);
        }

        let raw = fs::read(&backend.json_path)?;
        match serde_json::from_slice::<Value>(&raw) {
            Ok(Value::Object(data)) => backend.json_data = data,
            Ok(_) => {
                tracing::warn!(path = %backend.json_path.display(), "document is not an object, resetting");
                backend.commit_to_disk()?;
            }
            Err(e) => {
                tracing::warn!(path = %backend.json_path.display(), error = %e, "corrupted document, resetting");
                backend.commit_to_disk()?;
            }
        }

        Ok(backend)
    }

    /// Path of the backing document
    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    /// Rewrite the whole document from the in-memory mapping
    fn commit_to_disk(&self) -> StoreResult<()> {
        let mut writer = BufWriter::new(File::create(&self.json_path)?);
        serde_json::to_writer(&mut writer, &self.json_data)?;
        writer.flush()?;
        Ok(())
    }
}

impl StorageBackend for JsonBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Json
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.json_data.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.json_data.insert(key.to_string(), value);
        self.commit_to_disk()
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        if self.json_data.remove(key).is_some() {
            self.commit_to_disk()?;
        }
        Ok(())
    }

    fn clear(&mut self) -> StoreResult<()> {
        if self.json_path.is_file() {
            fs::remove_file(&self.json_path)?;
        }
        self.json_data.clear();
        self.commit_to_disk()?;
        tracing::info!(path = %self.json_path.display(), "cleared json store");
        Ok(())
    }

    fn physical_path(&self) -> Option<PathBuf> {
        Some(self.json_path.clone())
    }

    fn cached_snapshot(&self) -> Option<Map<String, Value>> {
        Some(self.json_data.clone())
    }
}
