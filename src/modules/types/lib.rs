//! Type definitions for mongohook
//!
//! This crate contains shared type definitions used across the mongohook
//! codebase, most importantly the connection profile handed out by registries.

pub mod profile;

pub use profile::ConnectionProfile;
