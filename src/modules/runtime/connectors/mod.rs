//! Client connectors for mongohook
//!
//! A connector wraps the database driver behind the small surface the hook
//! needs: open a client, check liveness, select a database.

mod mongodb;
mod traits;

pub use mongodb::MongoDbConnector;
pub use traits::ClientConnector;
