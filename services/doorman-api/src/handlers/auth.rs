//! Public authentication handlers (signup, login, verify-token)

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

// Request fields default to empty strings so an absent field fails the
// same validation path as an empty one, instead of a 422 from the
// extractor.

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: &'static str,
    pub token: String,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub message: &'static str,
    pub username: String,
    /// Expiry of the verified token, epoch seconds
    pub expires_at: i64,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/public/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    state.auth.signup(&req.username, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created successfully",
        }),
    ))
}

/// POST /api/public/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = state.auth.login(&req.username, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful",
        token,
        username: req.username,
    }))
}

/// POST /api/public/verify-token
pub async fn verify_token(
    State(state): State<AppState>,
    Json(req): Json<VerifyTokenRequest>,
) -> ApiResult<Json<VerifyTokenResponse>> {
    if req.token.trim().is_empty() {
        return Err(ApiError::BadRequest("Token is required".to_string()));
    }

    let identity = state
        .auth
        .verify_access(&req.token)
        .map_err(|_| ApiError::Unauthorized("Token is invalid or expired".to_string()))?;

    Ok(Json(VerifyTokenResponse {
        valid: true,
        message: "Token is valid",
        username: identity.username,
        expires_at: identity.expires_at.timestamp(),
    }))
}
