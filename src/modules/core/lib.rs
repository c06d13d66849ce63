//! Core domain logic for mongohook
//!
//! This crate contains the connection URI builder, the profile registry
//! abstraction and the error types shared by the other mongohook crates.

pub mod domain;
pub mod error;

pub use domain::*;
pub use error::{MongoHookError, Result};
