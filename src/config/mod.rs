//! Configuration for the store.
//!
//! Settings come from an optional TOML file and can be overridden through
//! environment variables (optionally loaded from a `.env` file).
//!
//! # Example
//!
//! ```no_run
//! use localstore::config::{ConfigurationLoader, EnvironmentLoader};
//! use localstore::store::Store;
//! use std::path::Path;
//!
//! let env = EnvironmentLoader::new(None);
//! let loader = ConfigurationLoader::new(Some(Path::new("localstore.toml"))).unwrap();
//! let settings = loader.settings_with_env(&env).unwrap();
//!
//! let store = Store::with_settings("myapp", &settings).unwrap();
//! println!("Using {} backend in {}", store.kind(), store.root().display());
//! ```

pub mod config;
pub mod environment;

// Re-export main types for convenience
pub use self::config::{Configuration, ConfigurationLoader, StoreConfig};
pub use self::environment::{EnvironmentLoader, BACKEND_ENV_VAR, ROOT_ENV_VAR};
