//! Client-side session management for the AI Hub auth backend.
//!
//! [`SessionClient`] keeps the signed-in [`Identity`] in an injected
//! [`KeyValueStore`] and talks to the remote authority over HTTP through
//! [`AuthClient`].

pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod identity;
pub(crate) mod session_client;
pub(crate) mod store;


pub use client::{ApiResponse, AuthClient};
pub use error::{AuthError, Result as AuthResult};
pub use identity::{CURRENT_USER_KEY, Identity};
pub use session_client::SessionClient;
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError, StoreErrorResult};

pub(crate) const REGISTER_PATH: &str = "/api/auth/register";
pub(crate) const LOGIN_PATH: &str = "/api/auth/login";
pub(crate) const ADD_SESSION_PATH: &str = "/api/auth/add_session";
pub(crate) const USER_SESSIONS_PATH: &str = "/api/auth/user_sessions";
pub(crate) const REMOVE_SESSION_PATH: &str = "/api/auth/remove_session";

pub const REGISTRATION_FALLBACK_MESSAGE: &str = "Registration failed";
pub const LOGIN_FALLBACK_MESSAGE: &str = "Login failed";
