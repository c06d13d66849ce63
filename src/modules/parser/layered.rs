//! Registry chaining

use mongohook_core::{ConnectionRegistry, MongoHookError, Result};
use mongohook_types::ConnectionProfile;

/// Ordered list of registries; the first one that knows an id wins.
///
/// `ProfileNotFound` from one layer falls through to the next. Any other
/// error stops the lookup.
#[derive(Default)]
pub struct LayeredRegistry {
    layers: Vec<Box<dyn ConnectionRegistry>>,
}

impl LayeredRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer with lower precedence than the existing ones
    pub fn push(&mut self, registry: impl ConnectionRegistry + 'static) {
        self.layers.push(Box::new(registry));
    }

    pub fn with_layer(mut self, registry: impl ConnectionRegistry + 'static) -> Self {
        self.push(registry);
        self
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl ConnectionRegistry for LayeredRegistry {
    fn lookup(&self, conn_id: &str) -> Result<ConnectionProfile> {
        for layer in &self.layers {
            match layer.lookup(conn_id) {
                Err(MongoHookError::ProfileNotFound(_)) => continue,
                other => return other,
            }
        }
        Err(MongoHookError::ProfileNotFound(conn_id.to_string()))
    }

    fn conn_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.layers.iter().flat_map(|l| l.conn_ids()).collect();
        ids.sort();
        ids.dedup();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnvRegistry;
    use mongohook_core::InMemoryRegistry;
    use std::collections::HashMap;

    #[test]
    fn test_first_layer_wins() {
        let registry = LayeredRegistry::new()
            .with_layer(InMemoryRegistry::new().with_profile("shared", ConnectionProfile::new("first")))
            .with_layer(InMemoryRegistry::new().with_profile("shared", ConnectionProfile::new("second")));
        assert_eq!(registry.lookup("shared").unwrap().host(), Some("first"));
    }

    #[test]
    fn test_falls_through_to_later_layer() {
        let registry = LayeredRegistry::new()
            .with_layer(InMemoryRegistry::new())
            .with_layer(InMemoryRegistry::new().with_profile("only_file", ConnectionProfile::new("f")));
        assert_eq!(registry.lookup("only_file").unwrap().host(), Some("f"));
    }

    #[test]
    fn test_not_found_anywhere() {
        let registry = LayeredRegistry::new().with_layer(InMemoryRegistry::new());
        let err = registry.lookup("ghost").unwrap_err();
        assert!(matches!(err, MongoHookError::ProfileNotFound(id) if id == "ghost"));
    }

    #[test]
    fn test_config_error_stops_lookup() {
        let mut vars = HashMap::new();
        vars.insert("MONGOHOOK_CONN_BROKEN".to_string(), "::::".to_string());
        let registry = LayeredRegistry::new()
            .with_layer(EnvRegistry::from_vars(vars))
            .with_layer(InMemoryRegistry::new().with_profile("broken", ConnectionProfile::new("ok")));
        assert!(matches!(
            registry.lookup("broken"),
            Err(MongoHookError::Config(_))
        ));
    }

    #[test]
    fn test_conn_ids_merged() {
        let registry = LayeredRegistry::new()
            .with_layer(InMemoryRegistry::new().with_profile("b", ConnectionProfile::new("h")))
            .with_layer(
                InMemoryRegistry::new()
                    .with_profile("a", ConnectionProfile::new("h"))
                    .with_profile("b", ConnectionProfile::new("h")),
            );
        assert_eq!(registry.conn_ids(), vec!["a", "b"]);
    }
}
