//! Storage Backend Abstraction
//!
//! Every backend implements [`StorageBackend`]; the facade holds exactly one
//! of them inside the [`Backend`] sum type, chosen once from a
//! [`BackendKind`].
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │        Store        │
//! │  (facade, uniform)  │
//! └──────────┬──────────┘
//!            │
//! ┌──────────▼──────────┐
//! │   StorageBackend    │  <-- Trait
//! └──────────┬──────────┘
//!            │
//!     ┌──────┼───────┐
//!     │      │       │
//! ┌───▼──┐┌──▼───┐┌──▼─────┐
//! │ Text ││ JSON ││ SQLite │
//! └──────┘└──────┘└────────┘
//! ```

mod json_backend;
mod sqlite_backend;
mod text_backend;
mod traits;

pub use json_backend::JsonBackend;
pub use sqlite_backend::{SqliteBackend, TABLE_NAME};
pub use text_backend::TextBackend;
pub use traits::{BackendKind, StorageBackend};

use serde_json::{Map, Value};
use std::path::PathBuf;

use super::errors::StoreResult;
use super::namespace::NamespaceDir;

/// The active backend of a store
#[derive(Debug)]
pub enum Backend {
    /// File-per-key backend
    Text(TextBackend),
    /// Single-document backend
    Json(JsonBackend),
    /// Single-table database backend
    Sqlite(SqliteBackend),
}

impl Backend {
    /// Construct the backend selected by `kind` over a resolved namespace
    pub fn open(kind: BackendKind, namespace: &NamespaceDir) -> StoreResult<Self> {
        let backend = match kind {
            BackendKind::Text => Backend::Text(TextBackend::new(namespace)),
            BackendKind::Json => Backend::Json(JsonBackend::open(namespace)?),
            BackendKind::Sqlite => Backend::Sqlite(SqliteBackend::open(namespace)?),
        };
        tracing::debug!(namespace = namespace.name(), backend = %kind, "opened backend");
        Ok(backend)
    }

    fn inner(&self) -> &dyn StorageBackend {
        match self {
            Backend::Text(b) => b,
            Backend::Json(b) => b,
            Backend::Sqlite(b) => b,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn StorageBackend {
        match self {
            Backend::Text(b) => b,
            Backend::Json(b) => b,
            Backend::Sqlite(b) => b,
        }
    }
}

impl StorageBackend for Backend {
    fn kind(&self) -> BackendKind {
        self.inner().kind()
    }

    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.inner().get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> StoreResult<()> {
        self.inner_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.inner_mut().remove(key)
    }

    fn clear(&mut self) -> StoreResult<()> {
        self.inner_mut().clear()
    }

    fn physical_path(&self) -> Option<PathBuf> {
        self.inner().physical_path()
    }

    fn cached_snapshot(&self) -> Option<Map<String, Value>> {
        self.inner().cached_snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_open_each_kind() {
        let temp_dir = TempDir::new().unwrap();
        let namespace = NamespaceDir::resolve(temp_dir.path(), "myapp").unwrap();

        for kind in [BackendKind::Text, BackendKind::Json, BackendKind::Sqlite] {
            let mut backend = Backend::open(kind, &namespace).unwrap();
            assert_eq!(backend.kind(), kind);

            backend.set("greeting", json!("hello")).unwrap();
            assert_eq!(backend.get("greeting").unwrap(), Some(json!("hello")));
            backend.remove("greeting").unwrap();
            assert_eq!(backend.get("greeting").unwrap(), None);
            assert!(backend.physical_path().unwrap().exists());
        }
    }

    #[test]
    fn test_snapshot_only_for_json() {
        let temp_dir = TempDir::new().unwrap();
        let namespace = NamespaceDir::resolve(temp_dir.path(), "myapp").unwrap();

        let mut json_backend = Backend::open(BackendKind::Json, &namespace).unwrap();
        json_backend.set("a", json!(1)).unwrap();
        let snapshot = json_backend.cached_snapshot().unwrap();
        assert_eq!(snapshot.get("a"), Some(&json!(1)));

        let text_backend = Backend::open(BackendKind::Text, &namespace).unwrap();
        assert!(text_backend.cached_snapshot().is_none());
    }
}
