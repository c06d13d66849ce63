//! Client connector trait definition

use async_trait::async_trait;
use mongohook_core::MongoHookError;

/// Trait for the driver behind a [`MongoHook`](crate::MongoHook)
///
/// The hook owns URI construction, caching and logging; a connector only
/// knows how to open a client, ask it whether the server is alive and pick
/// a database on it.
#[async_trait]
pub trait ClientConnector: Send + Sync {
    /// Client handle produced by [`connect`](Self::connect)
    type Client: Send + Sync;

    /// Database handle produced by [`database`](Self::database)
    type Database: Send;

    /// Driver options forwarded verbatim to database selection
    type DatabaseOptions: Default + Send;

    /// Create a client for the given connection string
    ///
    /// Drivers may connect lazily; reachability is only established by
    /// [`is_master`](Self::is_master).
    async fn connect(&self, uri: &str) -> Result<Self::Client, MongoHookError>;

    /// Run the liveness check against the server
    async fn is_master(&self, client: &Self::Client) -> Result<(), MongoHookError>;

    /// Select `name`, or the client's default database when `name` is `None`
    fn database(
        &self,
        client: &Self::Client,
        name: Option<&str>,
        options: Self::DatabaseOptions,
    ) -> Result<Self::Database, MongoHookError>;

    /// Release a client the hook no longer holds
    async fn close(&self, _client: &Self::Client) -> Result<(), MongoHookError> {
        Ok(())
    }

    /// Get the connector type name
    fn connector_type(&self) -> &'static str;
}
