//! Reference auth backend: account registry plus per-user session lists.

pub mod api;
pub mod error;
pub mod health;
pub mod routes;
pub mod session_registry;
pub mod state;
pub mod user_store;

#[cfg(test)]
mod tests;

pub use api::{
    auth::{add_session, login, register, remove_session, user_sessions},
    error::{ApiError, Result as ApiResult},
    requests::{CredentialsRequest, SessionRequest, UserSessionsQuery},
    responses::{AuthResponse, SuccessResponse},
};
pub use error::{Result as ServerResult, ServerError};
pub use routes::build_router;
pub use session_registry::SessionRegistry;
pub use state::AppState;
pub use user_store::{UserRecord, UserStore};
