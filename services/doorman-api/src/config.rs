//! Configuration for the doorman API service.

use std::path::PathBuf;
use std::time::Duration;

use doorman_core::AuthConfig;

/// Doorman API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Path of the JSON user store file
    pub users_file: PathBuf,

    /// Directory holding the HTML templates
    pub templates_dir: PathBuf,

    /// Auth core configuration
    pub auth: AuthConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        let users_file: PathBuf = std::env::var("USERS_FILE")
            .unwrap_or_else(|_| "users.json".to_string())
            .into();

        let templates_dir: PathBuf = std::env::var("TEMPLATES_DIR")
            .unwrap_or_else(|_| "ui/templates".to_string())
            .into();

        // Key length policy lives in AuthConfig; a short key fails below.
        let signing_key =
            std::env::var("SIGNING_KEY").map_err(|_| ConfigError::Missing("SIGNING_KEY"))?;

        // Token lifetime (default 1 hour)
        let token_ttl_secs: u64 = std::env::var("TOKEN_TTL_SECS")
            .unwrap_or_else(|_| "3600".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_SECS"))?;

        let auth = AuthConfig::new(signing_key)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_ttl(Duration::from_secs(token_ttl_secs));

        Ok(Self {
            http_port,
            users_file,
            templates_dir,
            auth,
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}
