//! Axum extractors for authentication

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Authenticated user extracted from the Authorization header
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

/// Auth rejection type
#[derive(Debug)]
pub enum AuthRejection {
    /// No usable bearer token in the Authorization header
    MissingToken,
    /// Token failed verification
    InvalidToken,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let detail = match self {
            Self::MissingToken => "Not authenticated",
            Self::InvalidToken => "Invalid or expired token",
        };
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Bearer")],
            Json(ErrorBody {
                detail: detail.to_string(),
            }),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(parts).ok_or(AuthRejection::MissingToken)?;

        let identity = app_state.auth.verify_access(&token).map_err(|e| {
            tracing::debug!(error = %e, "Bearer token rejected");
            AuthRejection::InvalidToken
        })?;

        Ok(AuthUser {
            username: identity.username,
            expires_at: identity.expires_at,
        })
    }
}

/// Pull the bearer token out of the Authorization header.
///
/// The scheme match is case-insensitive; anything else (no header, another
/// scheme, an empty credential) is treated as missing.
fn bearer_token(parts: &Parts) -> Option<String> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

// ============================================================================
// Tests
// ============================================================================
