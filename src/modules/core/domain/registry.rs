//! Connection profile registry

use mongohook_types::ConnectionProfile;
use std::collections::HashMap;

use crate::error::{MongoHookError, Result};

/// Profile id used when the caller does not name one
pub const DEFAULT_CONN_ID: &str = "mongo_default";

/// Source of named connection profiles
pub trait ConnectionRegistry: Send + Sync {
    /// Resolve the profile registered under `conn_id`
    ///
    /// Returns [`MongoHookError::ProfileNotFound`] when the id is unknown.
    fn lookup(&self, conn_id: &str) -> Result<ConnectionProfile>;

    /// Ids of all profiles this registry can resolve, sorted
    fn conn_ids(&self) -> Vec<String>;
}

/// Registry backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct InMemoryRegistry {
    profiles: HashMap<String, ConnectionProfile>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a profile, replacing any previous one with the same id
    pub fn insert(&mut self, conn_id: impl Into<String>, profile: ConnectionProfile) {
        self.profiles.insert(conn_id.into(), profile);
    }

    pub fn with_profile(mut self, conn_id: impl Into<String>, profile: ConnectionProfile) -> Self {
        self.insert(conn_id, profile);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &ConnectionProfile)> {
        self.profiles.iter()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl ConnectionRegistry for InMemoryRegistry {
    fn lookup(&self, conn_id: &str) -> Result<ConnectionProfile> {
        self.profiles
            .get(conn_id)
            .cloned()
            .ok_or_else(|| MongoHookError::ProfileNotFound(conn_id.to_string()))
    }

    fn conn_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.profiles.keys().cloned().collect();
        ids.sort();
        ids
    }
}
