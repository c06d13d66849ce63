//! YAML profile file parser

use mongohook_core::{InMemoryRegistry, MongoHookError};
use mongohook_types::ConnectionProfile;
use serde::Deserialize;
use std::collections::HashMap;

use crate::env::EnvSubstitutor;

/// YAML parser for connection profile files
pub struct YamlParser;

#[derive(Debug, Deserialize)]
struct ProfileFile {
    #[serde(default)]
    connections: HashMap<String, RawProfile>,
}

/// Profile as written in the file.
///
/// Scalars are kept loose so that `port: "27017"` (common after env
/// substitution into a quoted value) and `login: 123` both load.
#[derive(Debug, Deserialize)]
struct RawProfile {
    #[serde(default)]
    host: Option<serde_yaml::Value>,

    #[serde(default)]
    port: Option<serde_yaml::Value>,

    #[serde(default)]
    login: Option<serde_yaml::Value>,

    #[serde(default)]
    password: Option<serde_yaml::Value>,

    /// `database` is accepted as an alias
    #[serde(default, alias = "database")]
    schema: Option<serde_yaml::Value>,

    #[serde(default)]
    extras: Option<serde_yaml::Value>,
}

impl YamlParser {
    /// Parse a YAML string into a registry, substituting environment variables first
    pub fn parse(content: &str) -> Result<InMemoryRegistry, MongoHookError> {
        let substitutor = EnvSubstitutor::new();
        let substituted = substitutor.substitute(content)?;
        Self::parse_raw(&substituted)
    }

    /// Parse a YAML string without environment variable substitution
    pub fn parse_raw(content: &str) -> Result<InMemoryRegistry, MongoHookError> {
        let file = serde_yaml::from_str::<ProfileFile>(content)
            .map_err(|e| MongoHookError::Config(format!("YAML parse error: {}", e)))?;

        let mut registry = InMemoryRegistry::new();
        for (conn_id, raw) in file.connections {
            let profile = raw_to_profile(&conn_id, raw)?;
            registry.insert(conn_id, profile);
        }
        Ok(registry)
    }
}

fn raw_to_profile(conn_id: &str, raw: RawProfile) -> Result<ConnectionProfile, MongoHookError> {
    let port = match raw.port.and_then(yaml_scalar_to_string) {
        None => None,
        Some(port) => Some(port.trim().parse::<u16>().map_err(|_| {
            MongoHookError::Config(format!(
                "Connection '{}' has an invalid port: '{}'",
                conn_id, port
            ))
        })?),
    };

    Ok(ConnectionProfile {
        host: raw.host.and_then(yaml_scalar_to_string).unwrap_or_default(),
        port,
        login: raw.login.and_then(yaml_scalar_to_string),
        password: raw.password.and_then(yaml_scalar_to_string),
        schema: raw.schema.and_then(yaml_scalar_to_string),
        extras: raw.extras.and_then(yaml_scalar_to_string),
    })
}

fn yaml_scalar_to_string(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::Null => None,
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::String(s) => Some(s),
        // For non-scalars (seq/map), just serialize them.
        other => serde_yaml::to_string(&other)
            .ok()
            .map(|s| s.trim().to_string()),
    }
}
