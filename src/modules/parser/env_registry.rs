//! Profiles supplied as connection URIs in environment variables

use mongohook_core::{ConnectionRegistry, MongoHookError, Result};
use mongohook_types::ConnectionProfile;
use std::collections::HashMap;
use url::Url;

/// Prefix of variables holding connection URIs: `MONGOHOOK_CONN_<ID>`
pub const ENV_PREFIX: &str = "MONGOHOOK_CONN_";

/// Registry that resolves `MONGOHOOK_CONN_<ID>` variables.
///
/// The id is uppercased and `-` becomes `_`, so `reporting-replica` reads
/// `MONGOHOOK_CONN_REPORTING_REPLICA`. Ids listed by `conn_ids` are therefore
/// always in snake_case.
///
/// The variable holds a URI such as `mongodb://app:s3cret@db:27017/orders?authSource=admin`.
/// Percent-encoded credentials are kept encoded so the rebuilt URI stays
/// valid. Only single-host `mongodb://` URIs are understood; `mongodb+srv://`
/// and other schemes are rejected.
#[derive(Debug, Clone)]
pub struct EnvRegistry {
    prefix: String,
    /// Fixed variable set; `None` reads the process environment
    vars: Option<HashMap<String, String>>,
}

impl EnvRegistry {
    /// Registry over the process environment
    pub fn new() -> Self {
        Self {
            prefix: ENV_PREFIX.to_string(),
            vars: None,
        }
    }

    /// Registry over a fixed set of variables
    pub fn from_vars(vars: HashMap<String, String>) -> Self {
        Self {
            prefix: ENV_PREFIX.to_string(),
            vars: Some(vars),
        }
    }

    /// Variable name consulted for `conn_id`
    pub fn var_name(&self, conn_id: &str) -> String {
        format!("{}{}", self.prefix, conn_id.to_uppercase().replace('-', "_"))
    }

    fn var(&self, name: &str) -> Option<String> {
        match &self.vars {
            Some(vars) => vars.get(name).cloned(),
            None => std::env::var(name).ok(),
        }
    }

    fn var_names(&self) -> Vec<String> {
        match &self.vars {
            Some(vars) => vars.keys().cloned().collect(),
            None => std::env::vars().map(|(k, _)| k).collect(),
        }
    }
}

impl Default for EnvRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConnectionRegistry for EnvRegistry {
    fn lookup(&self, conn_id: &str) -> Result<ConnectionProfile> {
        let name = self.var_name(conn_id);
        match self.var(&name) {
            Some(uri) => parse_profile_uri(&uri).map_err(|e| match e {
                MongoHookError::Config(msg) => {
                    MongoHookError::Config(format!("Variable {}: {}", name, msg))
                }
                other => other,
            }),
            None => Err(MongoHookError::ProfileNotFound(conn_id.to_string())),
        }
    }

    fn conn_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .var_names()
            .into_iter()
            .filter_map(|name| name.strip_prefix(&self.prefix).map(str::to_lowercase))
            .filter(|id| !id.is_empty())
            .collect();
        ids.sort();
        ids
    }
}

/// Split a `mongodb://` connection URI into profile fields
pub fn parse_profile_uri(uri: &str) -> Result<ConnectionProfile> {
    let url = Url::parse(uri)
        .map_err(|e| MongoHookError::Config(format!("not a valid URI: {}", e)))?;

    if url.scheme() != "mongodb" {
        return Err(MongoHookError::Config(format!(
            "unsupported scheme '{}', expected 'mongodb'",
            url.scheme()
        )));
    }

    let schema = url.path().trim_start_matches('/');

    Ok(ConnectionProfile {
        host: url.host_str().unwrap_or_default().to_string(),
        port: url.port(),
        login: Some(url.username().to_string()).filter(|s| !s.is_empty()),
        password: url.password().map(str::to_string),
        schema: Some(schema.to_string()).filter(|s| !s.is_empty()),
        extras: url.query().map(str::to_string),
    })
}
