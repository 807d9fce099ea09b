//! Configuration loading and validation.

use crate::error::{LoaderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Target database configuration.
    pub database: DatabaseConfig,

    /// Load behavior configuration.
    #[serde(default)]
    pub load: LoadConfig,
}

/// Target database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    pub path: PathBuf,
}

/// Load behavior configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Rows buffered per bulk insert (default: 1000).
    #[serde(default = "default_insert_buffer_size")]
    pub insert_buffer_size: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            insert_buffer_size: default_insert_buffer_size(),
        }
    }
}

fn default_insert_buffer_size() -> usize {
    1000
}

impl LoaderConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: LoaderConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.load.insert_buffer_size == 0 {
            return Err(LoaderError::Config(
                "load.insert_buffer_size must be greater than zero".to_string(),
            ));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(LoaderError::Config(
                "database.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
