//! Input validation policy for usernames and passwords.
//!
//! Checks run in a fixed order and the first failure wins, so callers get
//! one actionable message at a time. All checks are pure functions over the
//! input strings.

use thiserror::Error;

use crate::config::AuthConfig;

/// Validation failures, each carrying the user-facing reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0}")]
    InvalidUsername(&'static str),

    #[error("{0}")]
    WeakPassword(&'static str),

    #[error("{0}")]
    MissingField(&'static str),
}

/// Username and password policy checks.
///
/// The reserved and denied word lists come from [`AuthConfig`]; both are
/// compared case-insensitively.
#[derive(Debug, Clone)]
pub struct Validator {
    reserved_usernames: Vec<String>,
    denied_passwords: Vec<String>,
}

impl Validator {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            reserved_usernames: config
                .reserved_usernames
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
            denied_passwords: config
                .denied_passwords
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Check username shape: 3-20 characters from `[A-Za-z0-9_]`, not on
    /// the reserved list.
    pub fn validate_username(&self, username: &str) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::InvalidUsername("Username cannot be empty"));
        }
        let length = username.chars().count();
        if length < 3 {
            return Err(ValidationError::InvalidUsername(
                "Username must be at least 3 characters long",
            ));
        }
        if length > 20 {
            return Err(ValidationError::InvalidUsername(
                "Username cannot exceed 20 characters",
            ));
        }
        if !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ValidationError::InvalidUsername(
                "Username can only contain letters, numbers, and underscore",
            ));
        }
        if self.reserved_usernames.contains(&username.to_lowercase()) {
            return Err(ValidationError::InvalidUsername(
                "This username is reserved",
            ));
        }
        Ok(())
    }

    /// Check password strength: 6-100 characters, at least one uppercase
    /// letter, one lowercase letter, and one digit, not on the
    /// common-password list.
    pub fn validate_password_strength(&self, password: &str) -> Result<(), ValidationError> {
        if password.trim().is_empty() {
            return Err(ValidationError::WeakPassword("Password cannot be empty"));
        }
        let length = password.chars().count();
        if length < 6 {
            return Err(ValidationError::WeakPassword(
                "Password must be at least 6 characters long",
            ));
        }
        if length > 100 {
            return Err(ValidationError::WeakPassword("Password is too long"));
        }
        if !password.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::WeakPassword(
                "Password must contain at least one uppercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(ValidationError::WeakPassword(
                "Password must contain at least one lowercase letter",
            ));
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(ValidationError::WeakPassword(
                "Password must contain at least one number",
            ));
        }
        if self.denied_passwords.contains(&password.to_lowercase()) {
            return Err(ValidationError::WeakPassword(
                "This password is too common. Please choose a stronger password",
            ));
        }
        Ok(())
    }

    /// Presence-only checks for login. No strength rules, so passwords
    /// created under an older policy can still sign in.
    pub fn validate_login_fields(
        &self,
        username: &str,
        password: &str,
    ) -> Result<(), ValidationError> {
        if username.trim().is_empty() {
            return Err(ValidationError::MissingField("Username is required"));
        }
        if password.trim().is_empty() {
            return Err(ValidationError::MissingField("Password is required"));
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
