//! JSON-file-backed user store.
//!
//! One JSON object keyed by username, read in full on every access and
//! rewritten in full on every mutation. That strategy only suits small user
//! populations and a single process; every read-modify-write cycle runs
//! under one mutex so two concurrent signups cannot both pass the duplicate
//! check. Multi-process deployments need a transactional backend behind the
//! same trait.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::UserRecord;
use crate::store::UserStore;

/// On-disk value; the username is the key in the surrounding object.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredUser {
    password: String,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

#[derive(Debug)]
pub struct JsonUserStore {
    path: PathBuf,
    /// Serializes every read-modify-write cycle. See the module docs.
    cycle: Mutex<()>,
}

impl JsonUserStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cycle: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole user set. A missing file is an empty set; an
    /// unreadable one is logged and treated as empty, and the next write
    /// replaces it.
    fn load(&self) -> StoreResult<BTreeMap<String, StoredUser>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&raw) {
            Ok(users) => Ok(users),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "User file unreadable, starting from an empty set"
                );
                Ok(BTreeMap::new())
            }
        }
    }

    fn save(&self, users: &BTreeMap<String, StoredUser>) -> StoreResult<()> {
        let raw = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonUserStore {
    async fn exists(&self, username: &str) -> StoreResult<bool> {
        let _cycle = self.cycle.lock();
        Ok(self.load()?.contains_key(username))
    }

    async fn get(&self, username: &str) -> StoreResult<Option<UserRecord>> {
        let _cycle = self.cycle.lock();
        let users = self.load()?;
        Ok(users.get(username).map(|stored| to_record(username, stored)))
    }

    async fn create(&self, username: &str, password_hash: &str) -> StoreResult<UserRecord> {
        let _cycle = self.cycle.lock();
        let mut users = self.load()?;
        if users.contains_key(username) {
            return Err(StoreError::DuplicateUser);
        }
        let stored = StoredUser {
            password: password_hash.to_string(),
            created_at: Utc::now(),
            last_login: None,
        };
        let record = to_record(username, &stored);
        users.insert(username.to_string(), stored);
        self.save(&users)?;
        Ok(record)
    }

    async fn touch_login(&self, username: &str) -> StoreResult<()> {
        let _cycle = self.cycle.lock();
        let mut users = self.load()?;
        if let Some(stored) = users.get_mut(username) {
            stored.last_login = Some(Utc::now());
            self.save(&users)?;
        }
        Ok(())
    }
}

fn to_record(username: &str, stored: &StoredUser) -> UserRecord {
    UserRecord {
        username: username.to_string(),
        password_hash: stored.password.clone(),
        created_at: stored.created_at,
        last_login: stored.last_login,
    }
}

// ============================================================================
// Tests
// ============================================================================
