//! Configuration types deserialized from `trellis.toml`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;
use trellis_common::LanguageKind;

/// The top-level server configuration parsed from `trellis.toml`.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// Core server metadata (name, logging verbosity).
    pub server: ServerMeta,
    /// Artifact cache tuning.
    #[serde(default)]
    pub cache: CacheSettings,
    /// Template-dialect file associations.
    #[serde(default)]
    pub templates: TemplateConfig,
}

/// Core server metadata required in every `trellis.toml`.
#[derive(Debug, Deserialize)]
pub struct ServerMeta {
    /// The server instance name, reported to the editor client.
    pub name: String,
    /// The logging verbosity threshold.
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Logging verbosity threshold for the `log` facade.
#[derive(Debug, Default, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// No logging at all.
    Off,
    /// Errors only.
    Error,
    /// Errors and warnings (default).
    #[default]
    Warn,
    /// Informational messages and below.
    Info,
    /// Debug messages and below.
    Debug,
    /// Everything, including per-operation traces.
    Trace,
}

/// Tuning for the versioned artifact cache.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CacheSettings {
    /// Maximum number of cached document artifacts.
    pub max_entries: usize,
    /// Background expiry sweep interval in seconds; `0` disables the sweep.
    pub sweep_interval_seconds: u64,
}

impl CacheSettings {
    /// Returns the sweep interval as a [`Duration`].
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_seconds)
    }
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            max_entries: 16,
            sweep_interval_seconds: 1800,
        }
    }
}

/// File associations for the templating dialect.
#[derive(Debug, Default, Deserialize)]
pub struct TemplateConfig {
    /// Map of file extension (without the dot) to language kind.
    #[serde(default)]
    pub extensions: BTreeMap<String, LanguageKind>,
}
