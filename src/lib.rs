//! LocalStore - per-application key-value persistence
//!
//! Stores string-keyed values for a named application namespace under
//! `~/.config/LocalStore/<namespace>/`, using one of three interchangeable
//! backends:
//!
//! - **text** - one file per key
//! - **json** - a single JSON document mirrored in memory (the default)
//! - **sqlite** - a single-table SQLite database
//!
//! # Features
//!
//! - **`config`** (default) - TOML configuration and environment overrides
//!
//! ```toml
//! [dependencies]
//! localstore = { version = "0.1" }
//! # Core only:
//! localstore = { version = "0.1", default-features = false }
//! ```
//!
//! # Example
//!
//! ```no_run
//! use localstore::store::{self, Confirmation};
//!
//! let mut prefs = store::create("myapp", "json").unwrap();
//! prefs.set("color", "blue").unwrap();
//! prefs.set("window", serde_json::json!({"width": 800, "height": 600})).unwrap();
//!
//! let reopened = store::create("myapp", "json").unwrap();
//! assert_eq!(reopened.get("color").unwrap(), Some("blue".into()));
//!
//! // Remove the backing file without prompting; the store is consumed
//! prefs.erase(Confirmation::Yes).unwrap();
//! ```
//!
//! # Example: Settings from a config file
//!
//! ```ignore
//! use localstore::config::{ConfigurationLoader, EnvironmentLoader};
//! use localstore::store::Store;
//!
//! let loader = ConfigurationLoader::new(Some(Path::new("localstore.toml")))?;
//! let settings = loader.settings_with_env(&EnvironmentLoader::default())?;
//! let store = Store::with_settings("myapp", &settings)?;
//! ```

#![warn(missing_docs)]

/// Backends, namespace resolution and the store facade
pub mod store;

/// Configuration management (enabled with the `config` feature)
#[cfg(feature = "config")]
pub mod config;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::store::{
        create, delete, BackendKind, Confirmation, EraseOutcome, StorageBackend, Store,
        StoreError, StoreResult, StoreSettings,
    };

    #[cfg(feature = "config")]
    pub use crate::config::{ConfigurationLoader, EnvironmentLoader};
}
