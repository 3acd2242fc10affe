use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] aihub_config::ConfigError),

    #[error("{}", .0.message())]
    Auth(#[from] aihub_auth::AuthError),

    #[error("Not signed in. Run `aihub login` or pass --username {location}")]
    NotSignedIn { location: ErrorLocation },
}

impl CliError {
    #[track_caller]
    pub fn not_signed_in() -> Self {
        CliError::NotSignedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
