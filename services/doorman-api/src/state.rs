//! Application state for the doorman API service.

use std::sync::Arc;

use doorman_core::AuthService;
use doorman_store::JsonUserStore;

use crate::config::Config;

/// The auth service as wired in this binary
pub type SharedAuthService = AuthService<JsonUserStore>;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Auth flows (signup, login, token verification)
    pub auth: Arc<SharedAuthService>,
    /// User store, for profile reads outside the auth flows
    pub store: Arc<JsonUserStore>,
    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(auth: SharedAuthService, store: Arc<JsonUserStore>, config: Config) -> Self {
        Self {
            auth: Arc::new(auth),
            store,
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
