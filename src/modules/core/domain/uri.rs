//! Connection URI construction and redaction

use mongohook_types::ConnectionProfile;
use std::fmt;

use crate::error::{MongoHookError, Result};

/// URI scheme prefix
pub const SCHEME: &str = "mongodb://";

/// Replacement written over the password in redacted URIs
pub const REDACTION_MASK: &str = "***";

/// A connection string together with its redacted display form.
///
/// Both strings are fixed at construction. `Display` and `Debug` only ever
/// print the redacted form.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionUri {
    uri: String,
    redacted: String,
}

impl ConnectionUri {
    /// Build `mongodb://[login[:password]@]host[:port][/schema][?extras]`.
    ///
    /// Pieces are appended in that order, each only when its field is
    /// non-empty. Nothing is escaped or normalized; `extras` is appended
    /// verbatim.
    pub fn from_profile(profile: &ConnectionProfile) -> Result<Self> {
        let host = profile.host().ok_or_else(|| {
            MongoHookError::Config("Connection profile has no host".to_string())
        })?;

        let mut uri = String::from(SCHEME);

        if let Some(login) = profile.login() {
            uri.push_str(login);
            if let Some(password) = profile.password() {
                uri.push(':');
                uri.push_str(password);
            }
            uri.push('@');
        }

        uri.push_str(host);

        if let Some(port) = profile.port() {
            uri.push(':');
            uri.push_str(&port.to_string());
        }

        if let Some(schema) = profile.schema() {
            uri.push('/');
            uri.push_str(schema);
        }

        if let Some(extras) = profile.extras() {
            uri.push('?');
            uri.push_str(extras);
        }

        let redacted = match profile.password() {
            Some(password) => redact(&uri, password),
            None => uri.clone(),
        };

        Ok(Self { uri, redacted })
    }

    /// The full connection string, credentials included
    pub fn as_str(&self) -> &str {
        &self.uri
    }

    /// The connection string with the password masked
    pub fn redacted(&self) -> &str {
        &self.redacted
    }
}

/// Replace every occurrence of `password` in `uri` with [`REDACTION_MASK`].
///
/// This is plain substring replacement: if the password also appears in the
/// host, database or extras, those occurrences are masked as well.
///
/// When the mask itself recreates the password (a password of `*`, or one
/// that overlaps `***` and its neighbours such as `*@h`), remaining
/// occurrences are deleted until none is left. The result never contains
/// `password`.
pub fn redact(uri: &str, password: &str) -> String {
    if password.is_empty() {
        return uri.to_string();
    }

    let mut redacted = uri.replace(password, REDACTION_MASK);
    // Each pass strictly shortens the string, so this terminates.
    while redacted.contains(password) {
        redacted = redacted.replace(password, "");
    }
    redacted
}

impl fmt::Display for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted)
    }
}

impl fmt::Debug for ConnectionUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConnectionUri").field(&self.redacted).finish()
    }
}
