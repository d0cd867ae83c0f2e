//! Store settings shared by the facade and the configuration loaders

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::backend::BackendKind;
use super::errors::{StoreError, StoreResult};

/// Directory name under `~/.config` that holds every namespace
pub const STORE_DIR_NAME: &str = "LocalStore";

/// Where namespaces live and which backend is used when none is named
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Root directory; each namespace is a direct child of it
    pub root: PathBuf,
    /// Backend used by [`crate::store::Store::with_settings`]
    #[serde(default)]
    pub default_backend: BackendKind,
}

impl StoreSettings {
    /// Settings rooted at `<home>/.config/LocalStore`
    pub fn from_home() -> StoreResult<Self> {
        Ok(Self::with_root(default_root()?))
    }

    /// Settings rooted at an explicit directory
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            default_backend: BackendKind::default(),
        }
    }

    /// Replace the default backend
    pub fn with_backend(mut self, kind: BackendKind) -> Self {
        self.default_backend = kind;
        self
    }
}

/// Get the default store root (`<home>/.config/LocalStore`)
pub fn default_root() -> StoreResult<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::HomeDirectory)?;
    Ok(home.join(".config").join(STORE_DIR_NAME))
}
