//! Auth orchestration: signup, login, and access verification.
//!
//! `AuthService` composes the validator, the credential hasher, the token
//! service, and a user store behind the [`UserStore`] trait. The HTTP layer
//! calls into this type and nothing below it.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use doorman_store::UserStore;

use crate::config::AuthConfig;
use crate::error::{AuthError, LoginError, SignupError};
use crate::password::CredentialHasher;
use crate::token::TokenService;
use crate::validate::Validator;

/// The identity proven by a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Orchestrates the auth flows over an injected user store.
pub struct AuthService<S> {
    validator: Validator,
    hasher: CredentialHasher,
    tokens: TokenService,
    store: Arc<S>,
}

impl<S: UserStore> AuthService<S> {
    pub fn new(config: AuthConfig, store: Arc<S>) -> Self {
        Self {
            validator: Validator::new(&config),
            hasher: CredentialHasher::default(),
            tokens: TokenService::new(&config),
            store,
        }
    }

    /// Swap the credential hasher, e.g. for reduced-cost test parameters.
    pub fn with_hasher(mut self, hasher: CredentialHasher) -> Self {
        self.hasher = hasher;
        self
    }

    // =========================================================================
    // Signup
    // =========================================================================

    /// Register a new user.
    ///
    /// Validation runs first and fails fast on the first broken rule. The
    /// duplicate check runs both before hashing (cheap rejection) and
    /// inside the store's `create` (authoritative under the store's write
    /// lock), so losing the race between the two reads still reports
    /// `UsernameTaken`.
    pub async fn signup(&self, username: &str, password: &str) -> Result<(), SignupError> {
        self.validator.validate_username(username)?;
        self.validator.validate_password_strength(password)?;

        if self.store.exists(username).await? {
            return Err(SignupError::UsernameTaken);
        }

        // Argon2 is CPU-bound; keep it off the async workers.
        let hasher = self.hasher.clone();
        let password = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| SignupError::Internal(format!("hashing task failed: {e}")))?
            .map_err(|e| SignupError::Internal(e.to_string()))?;

        self.store.create(username, &password_hash).await?;
        tracing::info!(username, "User registered");
        Ok(())
    }

    // =========================================================================
    // Login
    // =========================================================================

    /// Authenticate a user and issue an access token.
    ///
    /// An unknown username and a wrong password both produce
    /// [`LoginError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<String, LoginError> {
        self.validator.validate_login_fields(username, password)?;

        let Some(record) = self.store.get(username).await? else {
            tracing::debug!(username, "Login rejected: unknown user");
            return Err(LoginError::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let password = password.to_string();
        let password_hash = record.password_hash;
        let password_matches =
            tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
                .await
                .map_err(|e| LoginError::Internal(format!("verification task failed: {e}")))?;
        if !password_matches {
            tracing::debug!(username, "Login rejected: password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        self.store.touch_login(username).await?;

        let token = self
            .tokens
            .issue(username, Utc::now())
            .map_err(|e| LoginError::Internal(e.to_string()))?;
        tracing::info!(username, "Login successful");
        Ok(token)
    }

    // =========================================================================
    // Access verification
    // =========================================================================

    /// Verify a bearer token and return the identity it proves.
    ///
    /// Every token failure collapses to [`AuthError::Unauthorized`]; the
    /// subtype is logged here and goes no further.
    pub fn verify_access(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self.tokens.verify(token, Utc::now()).map_err(|e| {
            // Unverified decode is diagnostic only, never authorization.
            let subject = TokenService::decode_unverified(token).map(|c| c.username);
            tracing::debug!(
                error = %e,
                subject = subject.as_deref().unwrap_or("<unreadable>"),
                "Access token rejected"
            );
            AuthError::Unauthorized
        })?;

        let expires_at = claims.expires_at().ok_or_else(|| {
            tracing::debug!(username = %claims.username, "Token expiry out of range");
            AuthError::Unauthorized
        })?;

        Ok(Identity {
            username: claims.username,
            expires_at,
        })
    }
}
