//! Error types for cache construction.

/// Errors that can occur when constructing an artifact cache.
///
/// Lookups themselves define no errors of their own: a failure in the
/// caller-supplied production function propagates to the caller unchanged,
/// and eviction, explicit removal, and sweep expiry are pure bookkeeping
/// that cannot fail (removing an absent key is defined as success).
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The configured capacity was zero. A cache that can hold no entries
    /// is a programmer error, so construction fails fast instead of
    /// degrading into an always-miss map.
    #[error("cache capacity must be at least one entry")]
    ZeroCapacity,

    /// The background sweeper thread could not be spawned.
    #[error("failed to start cache sweeper: {source}")]
    Sweeper {
        /// The underlying spawn error.
        source: std::io::Error,
    },
}
