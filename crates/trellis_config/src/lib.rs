//! Parsing and validation of `trellis.toml` server configuration files.
//!
//! This crate reads the server configuration file and produces a
//! strongly-typed [`ServerConfig`] covering cache tuning, logging
//! verbosity, and the file-extension → language-kind mapping.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::*;
