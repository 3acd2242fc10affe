use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
