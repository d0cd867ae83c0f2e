//! Storage Backend Traits
//!
//! Defines the operation contract every backend implements and the selector
//! used to pick one.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::store::errors::{StoreError, StoreResult};

/// Tagged backend selector
///
/// Parsed from `"text"`, `"json"` or `"sqlite"`; anything else selects
/// [`BackendKind::Json`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BackendKind {
    /// One file per key
    Text,
    /// Single JSON document mirrored in memory
    #[default]
    Json,
    /// Single-table SQLite database
    Sqlite,
}

impl BackendKind {
    /// Selector name
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::Text => "text",
            BackendKind::Json => "json",
            BackendKind::Sqlite => "sqlite",
        }
    }

    /// Parse a selector, falling back to JSON for unknown names
    pub fn from_selector(selector: &str) -> Self {
        match selector.trim().to_ascii_lowercase().as_str() {
            "text" => BackendKind::Text,
            "sqlite" => BackendKind::Sqlite,
            _ => BackendKind::Json,
        }
    }
}

impl FromStr for BackendKind {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_selector(s))
    }
}

impl From<String> for BackendKind {
    fn from(selector: String) -> Self {
        Self::from_selector(&selector)
    }
}

impl From<BackendKind> for String {
    fn from(kind: BackendKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core trait for storage backends
///
/// The data operations default to [`StoreError::DummyBackend`]; a backend
/// that does not override them is unusable by construction.
pub trait StorageBackend {
    /// Which variant this is
    fn kind(&self) -> BackendKind;

    /// Read a value; a missing key is `Ok(None)`
    fn get(&self, _key: &str) -> StoreResult<Option<Value>> {
        Err(StoreError::DummyBackend)
    }

    /// Write a value, committing it before returning
    fn set(&mut self, _key: &str, _value: Value) -> StoreResult<()> {
        Err(StoreError::DummyBackend)
    }

    /// Delete a value; deleting a missing key is not an error
    fn remove(&mut self, _key: &str) -> StoreResult<()> {
        Err(StoreError::DummyBackend)
    }

    /// Drop every key in the namespace
    fn clear(&mut self) -> StoreResult<()> {
        Err(StoreError::DummyBackend)
    }

    /// Physical root of the backend on disk, if it has one
    fn physical_path(&self) -> Option<PathBuf> {
        None
    }

    /// In-memory copy of the stored data, if the backend keeps one
    fn cached_snapshot(&self) -> Option<Map<String, Value>> {
        None
    }
}
