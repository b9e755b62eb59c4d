//! Error types for the doorman API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use doorman_core::{LoginError, SignupError};

/// Error body carried by every non-2xx response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal causes are logged, never returned to the client
        let detail = match &self {
            Self::Internal(_) => {
                tracing::error!(error = %self, "Internal API error");
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<SignupError> for ApiError {
    fn from(err: SignupError) -> Self {
        match err {
            SignupError::Validation(e) => Self::BadRequest(e.to_string()),
            SignupError::UsernameTaken => Self::BadRequest("Username already exists".to_string()),
            SignupError::Internal(cause) => Self::Internal(cause),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(err: LoginError) -> Self {
        match err {
            LoginError::Validation(e) => Self::BadRequest(e.to_string()),
            LoginError::InvalidCredentials => {
                Self::Unauthorized("Invalid username or password".to_string())
            }
            LoginError::Internal(cause) => Self::Internal(cause),
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
