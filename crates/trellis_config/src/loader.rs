//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ServerConfig;
use std::path::Path;

/// Loads and validates a `trellis.toml` configuration from a directory.
///
/// Reads `<dir>/trellis.toml`, parses it, and validates required fields.
pub fn load_config(dir: &Path) -> Result<ServerConfig, ConfigError> {
    let config_path = dir.join("trellis.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `trellis.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that required fields are present and values are usable.
fn validate_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.server.name.is_empty() {
        return Err(ConfigError::MissingField("server.name".to_string()));
    }
    if config.cache.max_entries == 0 {
        return Err(ConfigError::ValidationError(
            "cache.max_entries must be at least 1".to_string(),
        ));
    }
    Ok(())
}
