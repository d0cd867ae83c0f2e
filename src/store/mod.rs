//! Per-application key-value store
//!
//! A [`Store`] binds one namespace to one backend, picked once at
//! construction. All namespaces live under `<home>/.config/LocalStore/`:
//!
//! ```text
//! ~/.config/LocalStore/<namespace>/
//!     <key>              text backend, one file per key
//!     <namespace>.json   json backend, one object for the whole namespace
//!     <namespace>.db     sqlite backend, table LocalStore(key, value)
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use localstore::store::{self, StoreResult};
//!
//! fn example() -> StoreResult<()> {
//!     let mut store = store::create("myapp", "sqlite")?;
//!     store.set("n", 42)?;
//!     assert_eq!(store.get("n")?, Some("42".into()));
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod erase;
pub mod errors;
pub mod fs_ops;
pub mod namespace;
pub mod settings;
pub mod value;

pub use backend::{Backend, BackendKind, StorageBackend};
pub use erase::{Confirmation, EraseOutcome};
pub use errors::{StoreError, StoreResult};
pub use namespace::NamespaceDir;
pub use settings::{default_root, StoreSettings};

use serde_json::{Map, Value};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Uniform front end over the active backend
#[derive(Debug)]
pub struct Store {
    namespace: NamespaceDir,
    backend: Backend,
}

impl Store {
    /// Open `namespace` under the home store root with a selector string
    /// (`"text"`, `"json"`, `"sqlite"`; anything else means JSON)
    pub fn create(namespace: &str, selector: &str) -> StoreResult<Self> {
        Self::open(namespace, BackendKind::from_selector(selector))
    }

    /// Open `namespace` under the home store root
    pub fn open(namespace: &str, kind: BackendKind) -> StoreResult<Self> {
        Self::open_in(settings::default_root()?, namespace, kind)
    }

    /// Open `namespace` with the root and default backend from `settings`
    pub fn with_settings(namespace: &str, settings: &StoreSettings) -> StoreResult<Self> {
        Self::open_in(&settings.root, namespace, settings.default_backend)
    }

    /// Open `namespace` under an explicit root directory
    pub fn open_in<P: AsRef<Path>>(root: P, namespace: &str, kind: BackendKind) -> StoreResult<Self> {
        let namespace = NamespaceDir::resolve(root, namespace)?;
        let backend = Backend::open(kind, &namespace)?;
        Ok(Self { namespace, backend })
    }

    /// Namespace name
    pub fn namespace(&self) -> &str {
        self.namespace.name()
    }

    /// Namespace directory
    pub fn root(&self) -> &Path {
        self.namespace.path()
    }

    /// Active backend kind
    pub fn kind(&self) -> BackendKind {
        self.backend.kind()
    }

    /// Read a value; a missing key is `Ok(None)`
    pub fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        self.backend.get(key)
    }

    /// Whether `key` currently has a value
    pub fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.get(key)?.is_some())
    }

    /// Store a value, committing it before returning
    pub fn set<V: Into<Value>>(&mut self, key: &str, value: V) -> StoreResult<()> {
        self.backend.set(key, value.into())
    }

    /// Store the `Display` form of a value that has no JSON shape
    pub fn set_display<V: Display + ?Sized>(&mut self, key: &str, value: &V) -> StoreResult<()> {
        self.backend.set(key, Value::String(value.to_string()))
    }

    /// Delete a value; missing keys are ignored
    pub fn remove(&mut self, key: &str) -> StoreResult<()> {
        self.backend.remove(key)
    }

    /// Drop every key in the namespace
    pub fn clear(&mut self) -> StoreResult<()> {
        self.backend.clear()
    }

    /// Backend's physical root (directory, document or database file)
    pub fn physical_path(&self) -> Option<PathBuf> {
        self.backend.physical_path()
    }

    /// Backend's in-memory copy of the data, if it keeps one
    pub fn cached_snapshot(&self) -> Option<Map<String, Value>> {
        self.backend.cached_snapshot()
    }

    /// Delete the backend's physical files, prompting on stdin unless
    /// `confirmation` is [`Confirmation::Yes`]
    ///
    /// The store is consumed whatever the outcome; reopen it to keep using
    /// the namespace.
    pub fn erase(self, confirmation: Confirmation) -> StoreResult<EraseOutcome> {
        let path = self.release();
        erase::erase_interactive(path.as_deref(), confirmation)
    }

    /// [`Store::erase`] with explicit prompt streams
    pub fn erase_with<R: BufRead, W: Write>(
        self,
        confirmation: Confirmation,
        input: &mut R,
        output: &mut W,
    ) -> StoreResult<EraseOutcome> {
        let path = self.release();
        erase::erase_path(path.as_deref(), confirmation, input, output)
    }

    /// Close the backend (and any open connection) and return its path
    fn release(self) -> Option<PathBuf> {
        let path = self.backend.physical_path();
        drop(self.backend);
        path
    }
}

/// Open `namespace` under the home store root
pub fn create(namespace: &str, selector: &str) -> StoreResult<Store> {
    Store::create(namespace, selector)
}

/// Clear every key of `store` and release it
pub fn delete(mut store: Store) -> StoreResult<()> {
    store.clear()
}
