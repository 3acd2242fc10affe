use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_PORT, DEFAULT_USERS_FILENAME, MIN_PORT,
};

use std::path::Path;

use serde::Deserialize;

/// Settings for the reference auth server.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Registered users, relative to the config directory
    pub users_file: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            users_file: String::from(DEFAULT_USERS_FILENAME),
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::invalid(
                "server",
                format!(
                    "port must be 0 (auto) or >= {}, got {}",
                    MIN_PORT, self.port
                ),
            ));
        }

        if Path::new(&self.users_file).is_absolute() || self.users_file.contains("..") {
            return Err(ConfigError::invalid(
                "server",
                "users_file must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
