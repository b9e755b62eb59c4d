//! Access token issuance and verification.
//!
//! Tokens are HS256 JWTs with the claims `{username, iat, exp, type}`.
//! Verification checks signature, expiry, and token type in that order,
//! against a caller-supplied `now`, so boundary behavior is deterministic
//! under test. Tokens are stateless: expiry is the only termination, there
//! is no revocation list.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::AuthConfig;

/// The `type` claim carried by tokens this service issues.
pub const TOKEN_TYPE_ACCESS: &str = "access";

/// Claim set embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject username
    pub username: String,
    /// Issued-at, epoch seconds
    pub iat: i64,
    /// Expiry, epoch seconds
    pub exp: i64,
    /// Token kind tag; only `"access"` grants anything
    #[serde(rename = "type")]
    pub token_type: String,
}

impl Claims {
    /// Expiry as a timestamp, if the claim value is representable.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

/// Token verification failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Not parseable as a JWT of the expected shape
    #[error("malformed token")]
    Malformed,

    /// Signature did not verify against the configured key
    #[error("bad signature")]
    BadSignature,

    /// `exp` is not in the future
    #[error("token expired")]
    Expired,

    /// `type` claim is not `"access"`
    #[error("wrong token type")]
    WrongType,
}

/// Errors that can occur while signing a token.
#[derive(Debug, Clone, Error)]
#[error("token signing failed: {0}")]
pub struct SigningError(String);

/// Issues and verifies signed access tokens.
///
/// Holds the process-wide signing key, loaded once at startup via
/// [`AuthConfig`]. Rotating the key invalidates all outstanding tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked manually in verify() against the caller's clock.
        validation.validate_exp = false;
        Self {
            encoding_key: EncodingKey::from_secret(config.signing_key.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_key.as_bytes()),
            validation,
            ttl: Duration::seconds(config.token_ttl.as_secs() as i64),
        }
    }

    /// Issue an access token for `username` with the configured TTL.
    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<String, SigningError> {
        self.issue_with_ttl(username, now, self.ttl)
    }

    /// Issue an access token with an explicit TTL.
    pub fn issue_with_ttl(
        &self,
        username: &str,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<String, SigningError> {
        let claims = Claims {
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };
        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| SigningError(e.to_string()))
    }

    /// Verify `token` at time `now`.
    ///
    /// Checks run in order: parse and signature, then expiry (a token
    /// with `now >= exp` is dead), then token type. The returned claims
    /// are trusted only after all three pass.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "Token rejected during decode");
            match e.kind() {
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            }
        })?;

        let claims = data.claims;
        if now.timestamp() >= claims.exp {
            tracing::debug!(username = %claims.username, "Token expired");
            return Err(TokenError::Expired);
        }
        if claims.token_type != TOKEN_TYPE_ACCESS {
            tracing::debug!(
                username = %claims.username,
                token_type = %claims.token_type,
                "Wrong token type"
            );
            return Err(TokenError::WrongType);
        }
        Ok(claims)
    }

    /// Decode claims without verifying signature or expiry.
    ///
    /// Diagnostic only: the output is attacker-controlled and must never
    /// feed an authorization decision. The verified path is [`Self::verify`].
    pub fn decode_unverified(token: &str) -> Option<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map(|data| data.claims)
            .ok()
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
