use crate::{ConfigError, ConfigErrorResult, DEFAULT_STORAGE_FILENAME};

use std::path::Path;

use serde::Deserialize;

/// Local key-value file holding the signed-in identity.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Relative to the config directory
    pub path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_STORAGE_FILENAME),
        }
    }
}

impl StorageConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.is_empty() {
            return Err(ConfigError::invalid("storage", "path cannot be empty"));
        }

        if Path::new(&self.path).is_absolute() || self.path.contains("..") {
            return Err(ConfigError::invalid(
                "storage",
                "path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
