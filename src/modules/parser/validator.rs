//! Profile validation

use mongohook_core::{InMemoryRegistry, MongoHookError};
use mongohook_types::ConnectionProfile;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

/// Regex pattern for valid ids (lower-kebab-case or lower_snake_case)
static NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:[-_][a-z0-9]+)*$").unwrap()
});

/// Profile validator
pub struct ProfileValidator {
    /// Whether to validate ids strictly
    strict_names: bool,
}

impl ProfileValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self { strict_names: true }
    }

    /// Create a validator with lenient id checking
    pub fn lenient() -> Self {
        Self { strict_names: false }
    }

    /// Validate every profile in the registry
    pub fn validate(&self, registry: &InMemoryRegistry) -> Result<(), MongoHookError> {
        let mut entries: Vec<_> = registry.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));

        for (conn_id, profile) in entries {
            self.validate_conn_id(conn_id)?;
            self.validate_profile(conn_id, profile)?;
        }
        Ok(())
    }

    fn validate_conn_id(&self, conn_id: &str) -> Result<(), MongoHookError> {
        if conn_id.is_empty() {
            return Err(MongoHookError::Validation(
                "Connection id cannot be empty".to_string(),
            ));
        }

        if self.strict_names && !NAME_PATTERN.is_match(conn_id) {
            return Err(MongoHookError::Validation(format!(
                "Invalid connection id '{}': must be lower-kebab-case or lower_snake_case",
                conn_id
            )));
        }

        Ok(())
    }

    /// Validate a single profile
    pub fn validate_profile(
        &self,
        conn_id: &str,
        profile: &ConnectionProfile,
    ) -> Result<(), MongoHookError> {
        if profile.host().is_none() {
            return Err(MongoHookError::Validation(format!(
                "Connection '{}' has no host",
                conn_id
            )));
        }

        if profile.extras().is_some_and(|e| e.starts_with('?')) {
            return Err(MongoHookError::Validation(format!(
                "Connection '{}': extras must not start with '?'",
                conn_id
            )));
        }

        if profile.password().is_some() && profile.login().is_none() {
            warn!(
                "Connection '{}' has a password but no login; the password will not be used",
                conn_id
            );
        }

        Ok(())
    }
}

impl Default for ProfileValidator {
    fn default() -> Self {
        Self::new()
    }
}
