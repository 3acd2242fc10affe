//! Signed-in identity and per-user session list, kept in sync with the
//! remote authority.
//!
//! Two failure policies apply:
//! - `register` and `login` propagate every failure to the caller.
//! - Session-list calls are best-effort. Each has a `try_*` form that
//!   returns the real `Result`; the plain form logs the error and discards
//!   it, yielding `()` or an empty list. Nothing is retried.

use crate::{
    ADD_SESSION_PATH, AuthClient, AuthError, AuthResult, CURRENT_USER_KEY, Identity,
    KeyValueStore, LOGIN_FALLBACK_MESSAGE, LOGIN_PATH, REGISTER_PATH,
    REGISTRATION_FALLBACK_MESSAGE, REMOVE_SESSION_PATH, USER_SESSIONS_PATH,
};

use std::sync::Arc;

use log::{debug, info, warn};
use serde::Serialize;
use serde_json::Value;
use tokio::task::JoinHandle;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct SessionRequest<'a> {
    username: &'a str,
    #[serde(rename = "sessionId")]
    session_id: &'a str,
}

pub struct SessionClient<S> {
    http: AuthClient,
    store: Arc<S>,
}

impl<S> Clone for SessionClient<S> {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> SessionClient<S> {
    pub fn new(http: AuthClient, store: S) -> Self {
        Self::with_shared_store(http, Arc::new(store))
    }

    pub fn with_shared_store(http: AuthClient, store: Arc<S>) -> Self {
        Self { http, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Account Operations
    // =========================================================================

    /// Create an account. Local state is not touched.
    ///
    /// Returns the server payload unmodified.
    pub async fn register(&self, username: &str, password: &str) -> AuthResult<Value> {
        let response = self
            .http
            .post_json(REGISTER_PATH, &Credentials { username, password })
            .await?;

        if !response.is_success() {
            let message = response
                .error_message()
                .unwrap_or_else(|| REGISTRATION_FALLBACK_MESSAGE.to_string());
            warn!("Registration of '{}' rejected: {}", username, message);
            return Err(AuthError::registration(message));
        }

        info!("Registered '{}'", username);
        response.json()
    }

    /// Sign in and persist `username` as the current identity, replacing any
    /// previous one.
    pub async fn login(&self, username: &str, password: &str) -> AuthResult<Value> {
        let response = self
            .http
            .post_json(LOGIN_PATH, &Credentials { username, password })
            .await?;

        if !response.is_success() {
            let message = response
                .error_message()
                .unwrap_or_else(|| LOGIN_FALLBACK_MESSAGE.to_string());
            warn!("Login of '{}' rejected: {}", username, message);
            return Err(AuthError::login(message));
        }

        let payload: Value = response.json()?;

        let identity = Identity::new(username);
        self.store.set(CURRENT_USER_KEY, &identity.encode()?)?;

        info!("Signed in as '{}'", username);
        Ok(payload)
    }

    /// Forget the current identity. A no-op when nobody is signed in.
    pub fn logout(&self) {
        match self.store.clear(CURRENT_USER_KEY) {
            Ok(()) => info!("Signed out"),
            Err(e) => warn!("Failed to clear stored identity: {}", e),
        }
    }

    /// The persisted identity, if any. Unreadable or malformed state reads as
    /// absent.
    pub fn current_user(&self) -> Option<Identity> {
        match self.store.get(CURRENT_USER_KEY) {
            Ok(Some(raw)) => Identity::decode(&raw),
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read stored identity: {}", e);
                None
            }
        }
    }

    // =========================================================================
    // Session Operations (best-effort)
    // =========================================================================

    /// Tell the remote authority `session_id` is valid for `username`.
    /// Failures are logged and dropped.
    pub async fn add_session(&self, username: &str, session_id: &str) {
        best_effort("add_session", self.try_add_session(username, session_id).await)
    }

    pub async fn try_add_session(&self, username: &str, session_id: &str) -> AuthResult<()> {
        let response = self
            .http
            .post_json(
                ADD_SESSION_PATH,
                &SessionRequest {
                    username,
                    session_id,
                },
            )
            .await?;

        if !response.is_success() {
            return Err(AuthError::status(response.status.as_u16(), ADD_SESSION_PATH));
        }

        debug!("Added session {} for '{}'", session_id, username);
        Ok(())
    }

    /// Session ids currently allowed for `username`, freshly fetched.
    /// Any failure yields an empty list.
    pub async fn user_sessions(&self, username: &str) -> Vec<String> {
        best_effort("user_sessions", self.try_user_sessions(username).await)
    }

    pub async fn try_user_sessions(&self, username: &str) -> AuthResult<Vec<String>> {
        let path = format!(
            "{}?username={}",
            USER_SESSIONS_PATH,
            urlencoding::encode(username)
        );
        let response = self.http.get(&path).await?;

        if !response.is_success() {
            return Err(AuthError::status(response.status.as_u16(), USER_SESSIONS_PATH));
        }

        response.json()
    }

    /// Tell the remote authority `session_id` is no longer valid for
    /// `username`. Failures are logged and dropped.
    pub async fn remove_session(&self, username: &str, session_id: &str) {
        best_effort(
            "remove_session",
            self.try_remove_session(username, session_id).await,
        )
    }

    pub async fn try_remove_session(&self, username: &str, session_id: &str) -> AuthResult<()> {
        let response = self
            .http
            .post_json(
                REMOVE_SESSION_PATH,
                &SessionRequest {
                    username,
                    session_id,
                },
            )
            .await?;

        if !response.is_success() {
            return Err(AuthError::status(
                response.status.as_u16(),
                REMOVE_SESSION_PATH,
            ));
        }

        debug!("Removed session {} for '{}'", session_id, username);
        Ok(())
    }
}

impl<S: KeyValueStore + 'static> SessionClient<S> {
    /// Run `add_session` as a detached task.
    ///
    /// Spawned notifications are not ordered relative to each other or to
    /// later calls on this client, and are never retried. Awaiting the
    /// handle is optional.
    pub fn spawn_add_session(&self, username: &str, session_id: &str) -> JoinHandle<()> {
        let client = self.clone();
        let username = username.to_string();
        let session_id = session_id.to_string();
        tokio::spawn(async move { client.add_session(&username, &session_id).await })
    }

    /// Run `remove_session` as a detached task. Same contract as
    /// [`spawn_add_session`](Self::spawn_add_session).
    pub fn spawn_remove_session(&self, username: &str, session_id: &str) -> JoinHandle<()> {
        let client = self.clone();
        let username = username.to_string();
        let session_id = session_id.to_string();
        tokio::spawn(async move { client.remove_session(&username, &session_id).await })
    }
}

/// Boundary policy for best-effort calls: log, then fall back to the default.
fn best_effort<T: Default>(operation: &str, result: AuthResult<T>) -> T {
    result.unwrap_or_else(|e| {
        warn!("{} failed, ignoring: {}", operation, e);
        T::default()
    })
}
