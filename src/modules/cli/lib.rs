//! mongohook CLI
//!
//! This crate provides the command-line interface for mongohook:
//! - uri: Print a profile's redacted connection string
//! - ping: Connect and run the liveness check
//! - list: List known profiles

pub mod commands;

pub use commands::{Cli, Commands};
