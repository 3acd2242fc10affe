use crate::StoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the auth backend
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// Registration rejected by the remote authority
    #[error("{message} {location}")]
    Registration {
        message: String,
        location: ErrorLocation,
    },

    /// Login rejected by the remote authority
    #[error("{message} {location}")]
    Login {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected status {status} from {path} {location}")]
    Status {
        status: u16,
        path: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Identity storage error: {source} {location}")]
    Store {
        location: ErrorLocation,
        #[source]
        source: StoreError,
    },
}

impl AuthError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        AuthError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        AuthError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn registration<S: Into<String>>(message: S) -> Self {
        AuthError::Registration {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login<S: Into<String>>(message: S) -> Self {
        AuthError::Login {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status: u16, path: &str) -> Self {
        AuthError::Status {
            status,
            path: path.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Human-readable message for user-facing failures.
    ///
    /// For registration and login rejections this is exactly the text the
    /// server sent (or the fallback), without the source location.
    pub fn message(&self) -> String {
        match self {
            AuthError::Registration { message, .. } | AuthError::Login { message, .. } => {
                message.clone()
            }
            AuthError::Http { message, .. } | AuthError::Json { message, .. } => message.clone(),
            AuthError::Status { status, path, .. } => {
                format!("Unexpected status {status} from {path}")
            }
            AuthError::Store { source, .. } => source.to_string(),
        }
    }
}

impl From<reqwest::Error> for AuthError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        AuthError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for AuthError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        AuthError::from_json(err)
    }
}

impl From<StoreError> for AuthError {
    #[track_caller]
    fn from(err: StoreError) -> Self {
        AuthError::Store {
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
