use std::collections::HashMap;

use tokio::sync::RwLock;

/// In-memory `username -> session ids` mapping, in insertion order.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, Vec<String>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent: adding a known id leaves the list unchanged.
    pub async fn add(&self, username: &str, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        let ids = sessions.entry(username.to_string()).or_default();
        if !ids.iter().any(|id| id == session_id) {
            ids.push(session_id.to_string());
        }
    }

    /// Idempotent: removing an unknown id is a no-op.
    pub async fn remove(&self, username: &str, session_id: &str) {
        let mut sessions = self.sessions.write().await;
        if let Some(ids) = sessions.get_mut(username) {
            ids.retain(|id| id != session_id);
            if ids.is_empty() {
                sessions.remove(username);
            }
        }
    }

    pub async fn list(&self, username: &str) -> Vec<String> {
        self.sessions
            .read()
            .await
            .get(username)
            .cloned()
            .unwrap_or_default()
    }
}
