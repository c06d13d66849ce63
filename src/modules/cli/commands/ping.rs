//! Ping command implementation

use clap::Args;
use mongohook_core::{ConnectionRegistry, MongoHookError, DEFAULT_CONN_ID};
use mongohook_runtime::MongoHook;
use tracing::info;

/// Ping command arguments
#[derive(Args, Debug)]
pub struct PingCommand {
    /// Connection profile id
    #[arg(default_value = DEFAULT_CONN_ID)]
    pub conn_id: String,

    /// Open a fresh client instead of reusing a cached one
    #[arg(long)]
    pub no_reuse: bool,

    /// List the collections of this database after connecting
    #[arg(short, long)]
    pub database: Option<String>,
}

impl PingCommand {
    /// Execute the ping command
    pub async fn execute(&self, registry: &dyn ConnectionRegistry) -> Result<(), MongoHookError> {
        let hook = MongoHook::new(registry, &self.conn_id, !self.no_reuse)?;

        info!("Checking {}", hook.redacted_uri());
        hook.get_client().await?;
        println!("{}: ok", self.conn_id);

        if let Some(database) = self.database.as_deref() {
            let db = hook.get_database(Some(database), None).await?;
            let collections = db
                .list_collection_names(None)
                .await
                .map_err(|e| MongoHookError::MongoDB(format!("listCollections failed: {}", e)))?;
            for collection in collections {
                println!("  {}", collection);
            }
        }

        hook.close().await
    }
}
