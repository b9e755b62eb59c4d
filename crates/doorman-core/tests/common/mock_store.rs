//! Mock user store for testing

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use doorman_store::{StoreError, StoreResult, UserRecord, UserStore};

/// In-memory user store for testing
#[derive(Debug, Default, Clone)]
pub struct MockUserStore {
    users: Arc<DashMap<String, UserRecord>>,
}

impl MockUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record directly, bypassing the create path
    pub fn insert_record(&self, record: UserRecord) {
        self.users.insert(record.username.clone(), record);
    }
}

#[async_trait]
impl UserStore for MockUserStore {
    async fn exists(&self, username: &str) -> StoreResult<bool> {
        Ok(self.users.contains_key(username))
    }

    async fn get(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        Ok(self.users.get(username).map(|r| r.value().clone()))
    }

    async fn create(&self, username: &str, password_hash: &str) -> StoreResult<UserRecord> {
        if self.users.contains_key(username) {
            return Err(StoreError::DuplicateUser);
        }
        let record = UserRecord {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
            last_login: None,
        };
        self.users.insert(username.to_string(), record.clone());
        Ok(record)
    }

    async fn touch_login(&self, username: &str) -> StoreResult<()> {
        if let Some(mut record) = self.users.get_mut(username) {
            record.last_login = Some(Utc::now());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_store_crud() {
        let store = MockUserStore::new();

        let record = store.create("alice", "hash").await.unwrap();
        assert_eq!(record.username, "alice");
        assert!(store.exists("alice").await.unwrap());

        let err = store.create("alice", "other").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateUser));

        store.touch_login("alice").await.unwrap();
        let fetched = store.get("alice").await.unwrap().unwrap();
        assert!(fetched.last_login.is_some());

        store.touch_login("ghost").await.unwrap();
        assert!(store.get("ghost").await.unwrap().is_none());
    }
}
