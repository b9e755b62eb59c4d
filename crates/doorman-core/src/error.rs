//! Flow-level error types for the auth service.
//!
//! Component errors (validation, store, token) are translated here at the
//! orchestration boundary; nothing below this taxonomy crosses into the
//! HTTP layer untranslated.

use doorman_store::StoreError;
use thiserror::Error;

use crate::validate::ValidationError;

/// Signup failures.
#[derive(Debug, Error)]
pub enum SignupError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The username is already registered.
    #[error("username already exists")]
    UsernameTaken,

    /// Store or hashing failure; the message is for logs, not users.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for SignupError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUser => SignupError::UsernameTaken,
            other => SignupError::Internal(other.to_string()),
        }
    }
}

/// Login failures.
#[derive(Debug, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Unknown user or wrong password. The two cases are deliberately
    /// indistinguishable to callers, so usernames cannot be enumerated.
    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for LoginError {
    fn from(err: StoreError) -> Self {
        LoginError::Internal(err.to_string())
    }
}

/// Access verification failures as seen by callers of `verify_access`.
///
/// Carries no subtype: which token check failed is logged, never returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("invalid or expired token")]
    Unauthorized,
}
