//! TOML configuration parsing and management.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::environment::EnvironmentLoader;
use crate::store::{default_root, BackendKind, StoreSettings};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Configuration {
    /// Store settings
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[store]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store root; `~` is expanded. Defaults to `~/.config/LocalStore`.
    pub root: Option<String>,
    /// Backend selector used when a store is opened from settings
    pub backend: Option<BackendKind>,
}

/// Configuration loader
#[derive(Debug, Clone)]
pub struct ConfigurationLoader {
    /// File the configuration was read from, if any
    pub config_path: Option<PathBuf>,
    /// Parsed configuration
    pub config: Configuration,
}

impl ConfigurationLoader {
    /// Initialize configuration loader.
    ///
    /// # Arguments
    /// * `config_path` - Path to TOML config file. If None or missing, uses default config.
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) if path.exists() => Self::load_config(path)?,
            _ => Configuration::default(),
        };

        Ok(Self {
            config_path: config_path.map(|p| p.to_path_buf()),
            config,
        })
    }

    /// Create a configuration loader from a pre-parsed Configuration.
    pub fn from_config(config: Configuration) -> Self {
        Self {
            config_path: None,
            config,
        }
    }

    /// Load configuration from TOML file.
    fn load_config(path: &Path) -> Result<Configuration> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
    }

    /// Get string configuration value.
    pub fn get_string(&self, key: &str) -> Option<String> {
        match key {
            "store.root" => self.config.store.root.clone(),
            "store.backend" => self.config.store.backend.map(|k| k.to_string()),
            _ => None,
        }
    }

    /// Resolve store settings from the file alone.
    pub fn settings(&self) -> Result<StoreSettings> {
        let root = match &self.config.store.root {
            Some(root) => PathBuf::from(shellexpand::tilde(root).into_owned()),
            None => default_root().context("Failed to resolve default store root")?,
        };

        Ok(StoreSettings {
            root,
            default_backend: self.config.store.backend.unwrap_or_default(),
        })
    }

    /// Resolve store settings, letting the environment override the file.
    pub fn settings_with_env(&self, env: &EnvironmentLoader) -> Result<StoreSettings> {
        let mut settings = match env.store_root() {
            Some(root) => StoreSettings {
                root,
                default_backend: self.config.store.backend.unwrap_or_default(),
            },
            None => self.settings()?,
        };

        if let Some(kind) = env.backend() {
            settings.default_backend = kind;
        }

        tracing::debug!(root = %settings.root.display(), backend = %settings.default_backend, "resolved store settings");
        Ok(settings)
    }
}
