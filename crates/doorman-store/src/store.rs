//! Storage contract for user records.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::UserRecord;

/// Durable mapping from username to credential record.
///
/// Implementations must enforce username uniqueness in `create` and treat
/// the check-then-create cycle as a single logical operation.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Returns true if a record exists for `username`.
    async fn exists(&self, username: &str) -> StoreResult<bool>;

    /// Fetches the record for `username`, if any.
    async fn get(&self, username: &str) -> StoreResult<Option<UserRecord>>;

    /// Persists a new record with `created_at` set to the current time and
    /// no `last_login`. Fails with `StoreError::DuplicateUser` if the
    /// username is taken.
    async fn create(&self, username: &str, password_hash: &str) -> StoreResult<UserRecord>;

    /// Sets `last_login` to the current time. Missing users are a silent
    /// no-op.
    async fn touch_login(&self, username: &str) -> StoreResult<()>;
}
