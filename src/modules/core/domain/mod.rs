//! Domain models for mongohook

mod registry;
mod uri;

pub use registry::{ConnectionRegistry, InMemoryRegistry, DEFAULT_CONN_ID};
pub use uri::{redact, ConnectionUri, REDACTION_MASK, SCHEME};
