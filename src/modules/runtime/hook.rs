//! MongoDB hook: named connection profile to validated client

use mongohook_core::{
    ConnectionRegistry, ConnectionUri, MongoHookError, Result, DEFAULT_CONN_ID,
};
use mongohook_types::ConnectionProfile;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error};

use crate::connectors::{ClientConnector, MongoDbConnector};

/// Turns a stored connection profile into a live, validated client.
///
/// The connection string and its redacted form are built once, when the
/// hook is created; no network traffic happens until [`get_client`] is
/// called. With `reuse_connection` set, the first validated client is cached
/// and handed out again on every later call.
///
/// Only the redacted URI is ever logged.
///
/// [`get_client`]: MongoHook::get_client
pub struct MongoHook<C: ClientConnector = MongoDbConnector> {
    conn_id: String,
    reuse_connection: bool,
    uri: ConnectionUri,
    connector: C,
    client: Mutex<Option<Arc<C::Client>>>,
}

impl MongoHook<MongoDbConnector> {
    /// Create a hook for `conn_id` using the MongoDB driver
    pub fn new(
        registry: &dyn ConnectionRegistry,
        conn_id: &str,
        reuse_connection: bool,
    ) -> Result<Self> {
        Self::with_connector(registry, conn_id, reuse_connection, MongoDbConnector::new())
    }

    /// Create a hook for [`DEFAULT_CONN_ID`] that reuses its client
    pub fn with_defaults(registry: &dyn ConnectionRegistry) -> Result<Self> {
        Self::new(registry, DEFAULT_CONN_ID, true)
    }
}

impl<C: ClientConnector> MongoHook<C> {
    /// Create a hook that opens clients through `connector`
    pub fn with_connector(
        registry: &dyn ConnectionRegistry,
        conn_id: &str,
        reuse_connection: bool,
        connector: C,
    ) -> Result<Self> {
        let profile = registry.lookup(conn_id)?;
        Self::from_profile(conn_id, &profile, reuse_connection, connector)
    }

    /// Create a hook from an already resolved profile
    pub fn from_profile(
        conn_id: &str,
        profile: &ConnectionProfile,
        reuse_connection: bool,
        connector: C,
    ) -> Result<Self> {
        let uri = ConnectionUri::from_profile(profile).map_err(|e| match e {
            MongoHookError::Config(msg) => {
                MongoHookError::Config(format!("Connection '{}': {}", conn_id, msg))
            }
            other => other,
        })?;

        debug!("Mongo connection {}: {}", conn_id, uri.redacted());

        Ok(Self {
            conn_id: conn_id.to_string(),
            reuse_connection,
            uri,
            connector,
            client: Mutex::new(None),
        })
    }

    pub fn conn_id(&self) -> &str {
        &self.conn_id
    }

    pub fn reuse_connection(&self) -> bool {
        self.reuse_connection
    }

    /// Full connection string, credentials included. Never log this.
    pub fn connection_uri(&self) -> &str {
        self.uri.as_str()
    }

    /// Connection string with the password masked
    pub fn redacted_uri(&self) -> &str {
        self.uri.redacted()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }

    /// Whether a validated client is currently held
    pub async fn has_cached_client(&self) -> bool {
        self.client.lock().await.is_some()
    }

    /// Return a validated client.
    ///
    /// In reuse mode a cached client is returned without contacting the
    /// server; concurrent first calls share a single connection attempt.
    /// Otherwise every call opens a new client and runs the liveness check.
    ///
    /// A failed liveness check yields [`MongoHookError::ConnectionUnavailable`];
    /// a client that cannot be created at all returns the connector's error.
    /// Either way nothing is cached, so calling again retries from scratch.
    pub async fn get_client(&self) -> Result<Arc<C::Client>> {
        if !self.reuse_connection {
            let client = self.open_client().await?;
            *self.client.lock().await = Some(Arc::clone(&client));
            return Ok(client);
        }

        let mut cached = self.client.lock().await;
        if let Some(client) = cached.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = self.open_client().await?;
        *cached = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Return the database `name`, or the default database from the profile's
    /// schema when `name` is `None`.
    ///
    /// `options` are handed to the driver untouched.
    pub async fn get_database(
        &self,
        name: Option<&str>,
        options: Option<C::DatabaseOptions>,
    ) -> Result<C::Database> {
        let client = self.get_client().await?;
        self.connector
            .database(&client, name, options.unwrap_or_default())
    }

    /// Drop the held client; the next [`get_client`](Self::get_client) reconnects.
    pub async fn close(&self) -> Result<()> {
        let client = self.client.lock().await.take();
        if let Some(client) = client {
            debug!("Closing Mongo connection {}", self.uri.redacted());
            self.connector.close(&client).await?;
        }
        Ok(())
    }

    async fn open_client(&self) -> Result<Arc<C::Client>> {
        let client = match self.connector.connect(self.uri.as_str()).await {
            Ok(client) => client,
            Err(e) => {
                error!(
                    "Mongo connection {} could not be opened: {}",
                    self.uri.redacted(),
                    e.sanitized_message()
                );
                return Err(e);
            }
        };

        debug!("Opening new Mongo connection with {}", self.uri.redacted());

        if let Err(e) = self.connector.is_master(&client).await {
            error!(
                "Mongo connection {} failed: is the database reachable?",
                self.uri.redacted()
            );
            return Err(MongoHookError::unavailable(self.uri.redacted(), e));
        }

        Ok(Arc::new(client))
    }
}

impl<C: ClientConnector> std::fmt::Debug for MongoHook<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MongoHook")
            .field("conn_id", &self.conn_id)
            .field("reuse_connection", &self.reuse_connection)
            .field("uri", &self.uri)
            .field("connector", &self.connector.connector_type())
            .finish()
    }
}
