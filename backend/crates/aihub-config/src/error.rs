use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A setting failed validation. `section` is the TOML table it lives in.
    #[error("Invalid [{section}] setting: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot resolve config directory: {source} {location}")]
    ConfigDir {
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed TOML in {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: toml::de::Error,
    },

    #[error("Logger setup failed: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        ConfigError::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config_dir(source: std::io::Error) -> Self {
        ConfigError::ConfigDir {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn toml(path: &Path, source: toml::de::Error) -> Self {
        ConfigError::Toml {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        ConfigError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = Result<T, ConfigError>;
