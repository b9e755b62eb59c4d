//! Data models for the user store.

use chrono::{DateTime, Utc};

/// A stored user and their credential metadata.
///
/// `password_hash` is the opaque PHC string produced by the credential
/// hasher. It stays inside the auth subsystem; API response types never
/// serialize it.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    /// Set once at creation, never updated afterwards.
    pub created_at: DateTime<Utc>,
    /// Updated on each successful login. `None` until the first one.
    pub last_login: Option<DateTime<Utc>>,
}
