//! Namespace resolution
//!
//! A namespace is one application's slice of the store and maps to exactly
//! one directory directly under the store root.

use std::fs;
use std::path::{is_separator, Path, PathBuf};

use super::errors::{StoreError, StoreResult};

/// A resolved, existing namespace directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDir {
    name: String,
    path: PathBuf,
}

impl NamespaceDir {
    /// Resolve `namespace` under `root`, creating the directory if needed.
    ///
    /// Fails with [`StoreError::InvalidNamespace`] if the name contains a path
    /// separator. Calling it again for an existing namespace leaves its
    /// contents untouched.
    pub fn resolve<P: AsRef<Path>>(root: P, namespace: &str) -> StoreResult<Self> {
        if namespace.chars().any(is_separator) {
            return Err(StoreError::invalid_namespace(namespace));
        }

        let path = root.as_ref().join(namespace);
        if !path.is_dir() {
            fs::create_dir_all(&path)?;
            tracing::debug!(namespace, path = %path.display(), "created namespace directory");
        }

        Ok(Self {
            name: namespace.to_string(),
            path,
        })
    }

    /// Namespace name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file named `<namespace>.<extension>` inside the directory
    pub fn file_with_extension(&self, extension: &str) -> PathBuf {
        self.path.join(format!("{}.{}", self.name, extension))
    }
}
