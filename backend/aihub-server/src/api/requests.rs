use serde::Deserialize;

/// Body of register and login. Missing fields read as empty.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Body of add_session and remove_session
#[derive(Debug, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default, rename = "sessionId")]
    pub session_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserSessionsQuery {
    pub username: Option<String>,
}
