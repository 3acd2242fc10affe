use crate::{AppState, api::auth, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Accounts
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        // Sessions
        .route("/api/auth/add_session", post(auth::add_session))
        .route("/api/auth/user_sessions", get(auth::user_sessions))
        .route("/api/auth/remove_session", post(auth::remove_session))
        // Health check
        .route("/health", get(health::health_check))
        .with_state(state)
        // Browser front ends call from another origin during development
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
