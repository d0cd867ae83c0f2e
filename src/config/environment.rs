//! Environment variable loading and management.
//!
//! `LOCALSTORE_ROOT` overrides the store root and `LOCALSTORE_BACKEND` the
//! default backend selector.

use std::env;
use std::path::{Path, PathBuf};

use crate::store::BackendKind;

/// Environment variable overriding the store root
pub const ROOT_ENV_VAR: &str = "LOCALSTORE_ROOT";

/// Environment variable overriding the default backend
pub const BACKEND_ENV_VAR: &str = "LOCALSTORE_BACKEND";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to a .env file. Nothing is loaded unless a path is given.
    pub fn new(env_file: Option<&Path>) -> Self {
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!(path = %path.display(), error = %e, "failed to load .env file");
                }
            }
        }

        Self {
            env_file: env_file.map(|p| p.to_path_buf()),
        }
    }

    /// The .env file this loader was created with
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Store root override, if set and non-empty
    pub fn store_root(&self) -> Option<PathBuf> {
        env::var(ROOT_ENV_VAR)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(|v| PathBuf::from(shellexpand::tilde(&v).into_owned()))
    }

    /// Backend override, if set
    pub fn backend(&self) -> Option<BackendKind> {
        env::var(BACKEND_ENV_VAR)
            .ok()
            .map(|v| BackendKind::from_selector(&v))
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}
