use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error on {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file {path} is not a JSON object: {source} {location}")]
    Corrupt {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store lock poisoned {location}")]
    Poisoned { location: ErrorLocation },
}

impl StoreError {
    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn corrupt(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Corrupt {
            path: path.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn poisoned() -> Self {
        StoreError::Poisoned {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
