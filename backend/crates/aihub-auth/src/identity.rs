use serde::{Deserialize, Serialize};

/// Storage key of the signed-in identity.
pub const CURRENT_USER_KEY: &str = "aihub_current_user";

/// The locally persisted record of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub username: String,
}

impl Identity {
    pub fn new<S: Into<String>>(username: S) -> Self {
        Self {
            username: username.into(),
        }
    }

    /// Decode a stored value. Anything that is not a well-formed identity
    /// reads as "no session".
    pub fn decode(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(identity) => Some(identity),
            Err(e) => {
                log::debug!("Ignoring malformed stored identity: {e}");
                None
            }
        }
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
