//! MongoDB connector implementation

use async_trait::async_trait;
use bson::doc;
use mongodb::{
    options::{ClientOptions, DatabaseOptions},
    Client, Database,
};
use mongohook_core::MongoHookError;

use super::traits::ClientConnector;

/// Connector backed by the official `mongodb` driver
#[derive(Debug, Clone, Default)]
pub struct MongoDbConnector;

impl MongoDbConnector {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ClientConnector for MongoDbConnector {
    type Client = Client;
    type Database = Database;
    type DatabaseOptions = DatabaseOptions;

    async fn connect(&self, uri: &str) -> Result<Client, MongoHookError> {
        let options = ClientOptions::parse(uri).await.map_err(|e| {
            MongoHookError::MongoDB(format!("MongoDB options parse failed: {}", e))
        })?;

        Client::with_options(options).map_err(|e| {
            MongoHookError::MongoDB(format!("MongoDB client creation failed: {}", e))
        })
    }

    async fn is_master(&self, client: &Client) -> Result<(), MongoHookError> {
        client
            .database("admin")
            .run_command(doc! { "isMaster": 1 }, None)
            .await
            .map_err(|e| MongoHookError::MongoDB(format!("isMaster failed: {}", e)))?;
        Ok(())
    }

    fn database(
        &self,
        client: &Client,
        name: Option<&str>,
        options: DatabaseOptions,
    ) -> Result<Database, MongoHookError> {
        let name = match name {
            Some(name) => name.to_string(),
            None => client
                .default_database()
                .map(|db| db.name().to_string())
                .ok_or_else(|| {
                    MongoHookError::Config(
                        "No database specified and no default database in connection string"
                            .to_string(),
                    )
                })?,
        };
        Ok(client.database_with_options(&name, options))
    }

    /// Nothing to shut down explicitly: the driver releases its connection
    /// pool when the last `Arc<Client>` handed out by the hook is dropped.
    async fn close(&self, _client: &Client) -> Result<(), MongoHookError> {
        Ok(())
    }

    fn connector_type(&self) -> &'static str {
        "mongodb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_is_lazy() {
        // Nothing listens on this port; client creation must still succeed.
        let client = MongoDbConnector::new()
            .connect("mongodb://127.0.0.1:1/lazy")
            .await;
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_invalid_uri() {
        let result = MongoDbConnector::new().connect("mongodb://").await;
        assert!(matches!(result, Err(MongoHookError::MongoDB(_))));
    }

    #[tokio::test]
    async fn test_default_database_from_uri() {
        let connector = MongoDbConnector::new();
        let client = connector.connect("mongodb://127.0.0.1:1/orders").await.unwrap();

        let db = connector
            .database(&client, None, DatabaseOptions::default())
            .unwrap();
        assert_eq!(db.name(), "orders");

        let db = connector
            .database(&client, Some("audit"), DatabaseOptions::default())
            .unwrap();
        assert_eq!(db.name(), "audit");
    }

    #[tokio::test]
    async fn test_no_default_database() {
        let connector = MongoDbConnector::new();
        let client = connector.connect("mongodb://127.0.0.1:1").await.unwrap();
        let result = connector.database(&client, None, DatabaseOptions::default());
        assert!(matches!(result, Err(MongoHookError::Config(_))));
    }

    #[tokio::test]
    async fn test_close_leaves_other_handles_usable() {
        let connector = MongoDbConnector::new();
        let client = connector.connect("mongodb://127.0.0.1:1/orders").await.unwrap();
        connector.close(&client).await.unwrap();

        let db = connector
            .database(&client, None, DatabaseOptions::default())
            .unwrap();
        assert_eq!(db.name(), "orders");
    }

    #[tokio::test]
    #[ignore] // Requires a running MongoDB instance
    async fn test_is_master_live() {
        let connector = MongoDbConnector::new();
        let client = connector.connect("mongodb://localhost:27017").await.unwrap();
        assert!(connector.is_master(&client).await.is_ok());
    }
}
