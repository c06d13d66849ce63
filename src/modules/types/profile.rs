//! Connection profile definitions

use serde::{Deserialize, Serialize};

/// A named bundle of connection attributes resolved from a registry.
///
/// Empty strings are treated exactly like absent values, and a port of `0`
/// is treated as no port. Use the accessor methods rather than the raw
/// fields when building URIs so that rule is applied consistently.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionProfile {
    /// Host name (or comma-separated seed list) of the deployment
    #[serde(default)]
    pub host: String,

    /// Port number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    /// User name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Default database name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Pre-formatted query-string fragment, appended verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<String>,
}

impl ConnectionProfile {
    /// Create a profile pointing at the given host
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_extras(mut self, extras: impl Into<String>) -> Self {
        self.extras = Some(extras.into());
        self
    }

    /// Host, if non-empty
    pub fn host(&self) -> Option<&str> {
        non_empty(Some(&self.host))
    }

    /// Port, if set and non-zero
    pub fn port(&self) -> Option<u16> {
        self.port.filter(|p| *p != 0)
    }

    pub fn login(&self) -> Option<&str> {
        non_empty(self.login.as_ref())
    }

    pub fn password(&self) -> Option<&str> {
        non_empty(self.password.as_ref())
    }

    pub fn schema(&self) -> Option<&str> {
        non_empty(self.schema.as_ref())
    }

    pub fn extras(&self) -> Option<&str> {
        non_empty(self.extras.as_ref())
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

// Hand-written so a stray `{:?}` never prints the password.
impl std::fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("schema", &self.schema)
            .field("extras", &self.extras)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_fields_are_absent() {
        let profile = ConnectionProfile {
            host: String::new(),
            port: Some(0),
            login: Some(String::new()),
            password: Some(String::new()),
            schema: Some(String::new()),
            extras: Some(String::new()),
        };
        assert_eq!(profile.host(), None);
        assert_eq!(profile.port(), None);
        assert_eq!(profile.login(), None);
        assert_eq!(profile.password(), None);
        assert_eq!(profile.schema(), None);
        assert_eq!(profile.extras(), None);
    }

    #[test]
    fn test_builder() {
        let profile = ConnectionProfile::new("db.example.com")
            .with_port(27017)
            .with_login("app")
            .with_password("secret")
            .with_schema("orders")
            .with_extras("authSource=admin");
        assert_eq!(profile.host(), Some("db.example.com"));
        assert_eq!(profile.port(), Some(27017));
        assert_eq!(profile.login(), Some("app"));
        assert_eq!(profile.password(), Some("secret"));
        assert_eq!(profile.schema(), Some("orders"));
        assert_eq!(profile.extras(), Some("authSource=admin"));
    }

    #[test]
    fn test_debug_hides_password() {
        let profile = ConnectionProfile::new("h").with_password("hunter2");
        let debug = format!("{:?}", profile);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_profile_serde() {
        let profile: ConnectionProfile =
            serde_json::from_str(r#"{"host":"h","port":1,"schema":"s"}"#).unwrap();
        assert_eq!(profile, ConnectionProfile::new("h").with_port(1).with_schema("s"));

        let json = serde_json::to_string(&profile).unwrap();
        assert!(!json.contains("login"));
        assert!(json.contains("\"port\":1"));
    }
}
