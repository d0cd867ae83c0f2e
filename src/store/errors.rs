//! Error types for the store

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by the namespace resolver, the backends and the facade
#[derive(Error, Debug)]
pub enum StoreError {
    /// Namespace contains a path separator
    #[error("Invalid namespace '{namespace}': may not contain path separators")]
    InvalidNamespace {
        /// Rejected namespace
        namespace: String,
    },

    /// Key rejected by the text backend
    #[error("Invalid key name: {key}")]
    InvalidKey {
        /// Rejected key
        key: String,
    },

    /// Operation reached a backend that does not implement it
    #[error("Called dummy backend!")]
    DummyBackend,

    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Database failure
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// No home directory to root the store in
    #[error("Unable to determine home directory")]
    HomeDirectory,
}

impl StoreError {
    /// Create an invalid key error
    pub fn invalid_key<S: Into<String>>(key: S) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create an invalid namespace error
    pub fn invalid_namespace<S: Into<String>>(namespace: S) -> Self {
        Self::InvalidNamespace {
            namespace: namespace.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::invalid_key("../etc");
        assert_eq!(err.to_string(), "Invalid key name: ../etc");

        let err = StoreError::invalid_namespace("a/b");
        assert!(matches!(&err, StoreError::InvalidNamespace { namespace } if namespace == "a/b"));

        let err = StoreError::DummyBackend;
        assert_eq!(err.to_string(), "Called dummy backend!");

        let err = StoreError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "file not found",
        ));
        assert!(err.to_string().contains("IO error"));
    }

}
