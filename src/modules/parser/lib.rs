//! Connection profile loading for mongohook
//!
//! This crate handles parsing of YAML profile files, environment variable
//! substitution, profile validation and the environment-backed registry.

pub mod env;
pub mod env_registry;
pub mod layered;
pub mod validator;
pub mod yaml;

pub use env_registry::EnvRegistry;
pub use layered::LayeredRegistry;
pub use validator::ProfileValidator;
pub use yaml::YamlParser;

use mongohook_core::{InMemoryRegistry, MongoHookError};
use std::path::Path;
use tracing::debug;

/// Parse a profile file from a path
pub fn parse_file(path: impl AsRef<Path>) -> Result<InMemoryRegistry, MongoHookError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| {
        MongoHookError::Config(format!("Failed to read file '{}': {}", path.display(), e))
    })?;

    parse_string(&content)
}

/// Parse profiles from a string
pub fn parse_string(content: &str) -> Result<InMemoryRegistry, MongoHookError> {
    let registry = YamlParser::parse(content)?;

    let validator = ProfileValidator::new();
    validator.validate(&registry)?;

    Ok(registry)
}

/// Build the default registry: environment variables first, then the profile file.
///
/// A missing file is not an error; the registry then only sees the environment.
pub fn load_registry(path: impl AsRef<Path>) -> Result<LayeredRegistry, MongoHookError> {
    let path = path.as_ref();
    let mut registry = LayeredRegistry::new().with_layer(EnvRegistry::new());

    if path.exists() {
        let file = parse_file(path)?;
        debug!("Loaded {} connection profile(s) from {}", file.len(), path.display());
        registry.push(file);
    } else {
        debug!("Profile file {} not found, using environment only", path.display());
    }

    Ok(registry)
}
