//! Construction-time configuration for the artifact cache.

use crate::error::CacheError;
use std::time::Duration;

/// Configuration supplied when constructing an [`ArtifactCache`](crate::ArtifactCache).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries held at once. Inserting a brand-new key
    /// beyond this bound evicts the least-recently-accessed entry first.
    /// Must be at least one.
    pub max_entries: usize,

    /// Interval of the background expiry sweep. Every interval, entries
    /// idle for longer than the interval are removed. A zero interval
    /// disables the sweep entirely; entries are then bounded only by
    /// capacity eviction and explicit removal.
    pub sweep_interval: Duration,
}

impl CacheConfig {
    /// Creates a configuration with the given capacity and sweep interval.
    pub fn new(max_entries: usize, sweep_interval: Duration) -> Self {
        Self {
            max_entries,
            sweep_interval,
        }
    }

    /// Creates a configuration with the sweep disabled.
    pub fn without_sweep(max_entries: usize) -> Self {
        Self::new(max_entries, Duration::ZERO)
    }

    /// Validates the configuration, failing fast on a zero capacity.
    pub fn validate(&self) -> Result<(), CacheError> {
        if self.max_entries == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }

    /// Returns `true` if a background sweep should run.
    pub fn sweep_enabled(&self) -> bool {
        !self.sweep_interval.is_zero()
    }
}

impl Default for CacheConfig {
    /// Defaults sized for editor sessions: a couple dozen parsed documents,
    /// swept after half an hour idle.
    fn default() -> Self {
        Self {
            max_entries: 16,
            sweep_interval: Duration::from_secs(1800),
        }
    }
}
