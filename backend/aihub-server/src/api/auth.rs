//! Account and session REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthResponse, CredentialsRequest, SessionRequest,
    SuccessResponse, UserSessionsQuery,
};

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};
use log::info;

const CREDENTIALS_REQUIRED: &str = "Username and password are required";
const USERNAME_TAKEN: &str = "Username already exists";
const INVALID_CREDENTIALS: &str = "Invalid username or password";
const SESSION_FIELDS_REQUIRED: &str = "username and sessionId are required";
const USERNAME_REQUIRED: &str = "username is required";

/// Treat missing and empty strings alike
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn session_fields(request: SessionRequest) -> ApiResult<(String, String)> {
    match (non_empty(request.username), non_empty(request.session_id)) {
        (Some(username), Some(session_id)) => Ok((username, session_id)),
        _ => Err(ApiError::bad_request(SESSION_FIELDS_REQUIRED)),
    }
}

// =============================================================================
// Accounts
// =============================================================================

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let (Some(username), Some(password)) =
        (non_empty(request.username), non_empty(request.password))
    else {
        return Err(ApiError::bad_request(CREDENTIALS_REQUIRED));
    };

    if !state.users.insert(&username, &password).await? {
        return Err(ApiError::bad_request(USERNAME_TAKEN));
    }

    info!("Registered user '{}'", username);
    Ok(Json(AuthResponse {
        success: true,
        username,
    }))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> ApiResult<Json<AuthResponse>> {
    let Json(request) = payload?;

    let username = request.username.unwrap_or_default();
    let password = request.password.unwrap_or_default();

    if !state.users.verify(&username, &password).await? {
        return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
    }

    info!("User '{}' signed in", username);
    Ok(Json(AuthResponse {
        success: true,
        username,
    }))
}

// =============================================================================
// Sessions
// =============================================================================

/// POST /api/auth/add_session
pub async fn add_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(request) = payload?;
    let (username, session_id) = session_fields(request)?;

    state.sessions.add(&username, &session_id).await;

    Ok(Json(SuccessResponse { success: true }))
}

/// GET /api/auth/user_sessions?username=<name>
pub async fn user_sessions(
    State(state): State<AppState>,
    query: Result<Query<UserSessionsQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<String>>> {
    let Query(query) = query?;
    let username =
        non_empty(query.username).ok_or_else(|| ApiError::bad_request(USERNAME_REQUIRED))?;

    Ok(Json(state.sessions.list(&username).await))
}

/// POST /api/auth/remove_session
pub async fn remove_session(
    State(state): State<AppState>,
    payload: Result<Json<SessionRequest>, JsonRejection>,
) -> ApiResult<Json<SuccessResponse>> {
    let Json(request) = payload?;
    let (username, session_id) = session_fields(request)?;

    state.sessions.remove(&username, &session_id).await;

    Ok(Json(SuccessResponse { success: true }))
}
