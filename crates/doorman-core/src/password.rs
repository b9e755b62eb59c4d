//! Password hashing with Argon2id.
//!
//! Output is the PHC string format: the salt and cost parameters travel
//! inside the hash, so there is no separate salt storage and verification
//! works on hashes produced under older parameter choices. Hashing is
//! CPU-bound and belongs on a blocking thread in async contexts.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use thiserror::Error;

/// Errors that can occur while hashing a password.
#[derive(Debug, Clone, Error)]
#[error("password hashing failed: {0}")]
pub struct HashError(String);

/// One-way password hashing and verification.
///
/// The work factor is tunable through [`Params`]; the default is the
/// argon2 crate's default cost, which is sized to resist offline brute
/// force. Tests construct a hasher with reduced parameters.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            params: Params::default(),
        }
    }
}

impl CredentialHasher {
    /// Create a hasher with explicit Argon2 parameters.
    pub fn new(params: Params) -> Self {
        Self { params }
    }

    /// Hash a password with a fresh random salt. Equal inputs produce
    /// distinct outputs.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError(e.to_string()))
    }

    /// Verify a password against a PHC hash string, using the parameters
    /// embedded in it. Malformed hashes are reported as a mismatch, never
    /// an error. The underlying comparison is constant-time.
    pub fn verify(&self, password: &str, hash_string: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash_string) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
