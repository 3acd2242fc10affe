use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where the session client finds the remote authority.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Per-request timeout in seconds (0 = wait indefinitely)
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "client",
                format!(
                    "base_url must start with http:// or https://, got '{}'",
                    self.base_url
                ),
            ));
        }

        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                "client",
                format!(
                    "request_timeout_secs must be 0-{}, got {}",
                    MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
                ),
            ));
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        match self.request_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}
