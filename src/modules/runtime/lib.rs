//! MongoDB connection hook for mongohook
//!
//! This crate turns a named connection profile into a validated MongoDB
//! client, optionally reusing it across calls.

pub mod connectors;
pub mod hook;

pub use connectors::{ClientConnector, MongoDbConnector};
pub use hook::MongoHook;
