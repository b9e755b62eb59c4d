//! Configuration types for the auth core.
//!
//! The signing key and the validation word lists are explicit startup
//! configuration, passed by reference into the components that need them,
//! so tests can substitute fixtures instead of patching globals.

use std::time::Duration;

/// Usernames rejected at signup, matched case-insensitively.
pub const DEFAULT_RESERVED_USERNAMES: [&str; 5] = ["admin", "root", "system", "user", "test"];

/// Passwords rejected as too common, matched case-insensitively.
pub const DEFAULT_DENIED_PASSWORDS: [&str; 4] = ["password", "password123", "123456", "qwerty"];

/// Auth core configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing key for access tokens (minimum 32 bytes)
    pub signing_key: String,
    /// Access token lifetime
    pub token_ttl: Duration,
    /// Reserved usernames (lowercase comparison)
    pub reserved_usernames: Vec<String>,
    /// Denied common passwords (lowercase comparison)
    pub denied_passwords: Vec<String>,
}

impl AuthConfig {
    /// Minimum signing key length in bytes. HS256 keys shorter than the
    /// digest size weaken the MAC.
    pub const MIN_SIGNING_KEY_LEN: usize = 32;

    /// Create a new auth config with the default TTL and word lists.
    ///
    /// # Errors
    /// Returns an error if the signing key is shorter than 32 bytes.
    pub fn new(signing_key: impl Into<String>) -> Result<Self, AuthConfigError> {
        let signing_key = signing_key.into();
        if signing_key.len() < Self::MIN_SIGNING_KEY_LEN {
            return Err(AuthConfigError::KeyTooShort {
                actual: signing_key.len(),
                minimum: Self::MIN_SIGNING_KEY_LEN,
            });
        }
        Ok(Self {
            signing_key,
            token_ttl: Duration::from_secs(60 * 60), // 1 hour
            reserved_usernames: DEFAULT_RESERVED_USERNAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            denied_passwords: DEFAULT_DENIED_PASSWORDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        })
    }

    /// Set the access token lifetime
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Replace the reserved username list
    pub fn with_reserved_usernames(mut self, reserved: Vec<String>) -> Self {
        self.reserved_usernames = reserved;
        self
    }

    /// Replace the denied password list
    pub fn with_denied_passwords(mut self, denied: Vec<String>) -> Self {
        self.denied_passwords = denied;
        self
    }
}

// Never expose the signing key through Debug output.
impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_ttl", &self.token_ttl)
            .field("reserved_usernames", &self.reserved_usernames)
            .field("denied_passwords", &self.denied_passwords)
            .finish_non_exhaustive()
    }
}

/// Errors that can occur when building an auth config
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthConfigError {
    #[error("signing key too short: got {actual} bytes, need at least {minimum}")]
    KeyTooShort { actual: usize, minimum: usize },
}

// ============================================================================
// Tests
// ============================================================================
