//! Registered accounts, persisted as a pretty-printed JSON array.
//!
//! A missing or unreadable-as-JSON file reads as "no users". Passwords are
//! stored as given.

use crate::{ServerError, ServerResult};

use std::path::PathBuf;

use log::warn;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password: String,
}

#[derive(Debug)]
pub struct UserStore {
    path: PathBuf,
    // Held across each read-modify-write of the file
    lock: Mutex<()>,
}

impl UserStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Add a user. Returns `false` if the username is already taken.
    pub async fn insert(&self, username: &str, password: &str) -> ServerResult<bool> {
        let _guard = self.lock.lock().await;

        let mut users = self.load().await?;
        if users.iter().any(|u| u.username == username) {
            return Ok(false);
        }

        users.push(UserRecord {
            username: username.to_string(),
            password: password.to_string(),
        });
        self.save(&users).await?;

        Ok(true)
    }

    /// True if a user with exactly these credentials exists.
    pub async fn verify(&self, username: &str, password: &str) -> ServerResult<bool> {
        let _guard = self.lock.lock().await;

        let users = self.load().await?;
        Ok(users
            .iter()
            .any(|u| u.username == username && u.password == password))
    }

    pub async fn load(&self) -> ServerResult<Vec<UserRecord>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(ServerError::Io {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };

        match serde_json::from_str(&contents) {
            Ok(users) => Ok(users),
            Err(e) => {
                warn!(
                    "Users file {} is not valid JSON, treating as empty: {}",
                    self.path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    async fn save(&self, users: &[UserRecord]) -> ServerResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| ServerError::Io {
                    path: dir.to_path_buf(),
                    source: e,
                })?;
        }

        let contents = serde_json::to_string_pretty(users)?;
        tokio::fs::write(&self.path, contents)
            .await
            .map_err(|e| ServerError::Io {
                path: self.path.clone(),
                source: e,
            })
    }
}
