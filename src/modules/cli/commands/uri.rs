//! Uri command implementation

use clap::Args;
use mongohook_core::{ConnectionRegistry, MongoHookError, DEFAULT_CONN_ID};
use mongohook_runtime::MongoHook;

/// Uri command arguments
#[derive(Args, Debug)]
pub struct UriCommand {
    /// Connection profile id
    #[arg(default_value = DEFAULT_CONN_ID)]
    pub conn_id: String,
}

impl UriCommand {
    /// Print the redacted connection string for the profile
    pub fn execute(&self, registry: &dyn ConnectionRegistry) -> Result<(), MongoHookError> {
        println!("{}", self.render(registry)?);
        Ok(())
    }

    fn render(&self, registry: &dyn ConnectionRegistry) -> Result<String, MongoHookError> {
        let hook = MongoHook::new(registry, &self.conn_id, true)?;
        Ok(hook.redacted_uri().to_string())
    }
}
