//! Private profile handler

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use doorman_store::UserStore;

use crate::error::{ApiError, ApiResult};
use crate::extractors::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub username: String,
    /// Account creation time, ISO-8601
    pub created_at: String,
}

/// GET /api/private/profile
pub async fn profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let record = state
        .store
        .get(&user.username)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    // A valid token whose record has since vanished still answers; the
    // creation time is simply unknown.
    let created_at = match record {
        Some(r) => r.created_at.to_rfc3339(),
        None => "Unknown".to_string(),
    };

    Ok(Json(ProfileResponse {
        username: user.username,
        created_at,
    }))
}
