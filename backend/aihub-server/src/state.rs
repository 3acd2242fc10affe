use crate::{SessionRegistry, UserStore};

use std::sync::Arc;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserStore>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(users: UserStore) -> Self {
        Self {
            users: Arc::new(users),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }
}
