//! Error types for mongohook

use thiserror::Error;

/// Main error type for mongohook operations
#[derive(Error, Debug)]
pub enum MongoHookError {
    /// Configuration error (malformed profile, unreadable profile file, missing host)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Profile validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// No profile registered under the requested id
    #[error("Connection profile not found: {0}")]
    ProfileNotFound(String),

    /// The server did not answer the liveness check
    #[error("Mongo connection {uri} failed: is the database reachable?")]
    ConnectionUnavailable {
        /// Redacted connection URI
        uri: String,
        #[source]
        source: Box<MongoHookError>,
    },

    /// MongoDB driver error
    #[error("MongoDB error: {0}")]
    MongoDB(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Environment variable not found
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
}

impl MongoHookError {
    /// Wrap a liveness failure for the given (redacted) URI
    pub fn unavailable(uri: impl Into<String>, source: MongoHookError) -> Self {
        MongoHookError::ConnectionUnavailable {
            uri: uri.into(),
            source: Box::new(source),
        }
    }

    /// Returns true if this error should be logged at error level rather
    /// than reported as a usage problem
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            MongoHookError::ConnectionUnavailable { .. } | MongoHookError::MongoDB(_)
        )
    }

    /// Returns true if calling again may succeed without changing configuration
    pub fn is_retryable(&self) -> bool {
        matches!(self, MongoHookError::ConnectionUnavailable { .. })
    }

    /// Sanitize the error message to avoid leaking sensitive information
    pub fn sanitized_message(&self) -> String {
        match self {
            // Driver messages may echo the raw connection string
            MongoHookError::MongoDB(_) => "Database connection error".to_string(),

            // The URI here is already redacted
            MongoHookError::ConnectionUnavailable { .. } => self.to_string(),

            MongoHookError::ProfileNotFound(id) => format!("Connection profile not found: {}", id),
            MongoHookError::Validation(msg) => format!("Validation error: {}", msg),

            _ => self.to_string(),
        }
    }
}

/// Result type alias using MongoHookError
pub type Result<T> = std::result::Result<T, MongoHookError>;
