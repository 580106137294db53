//! Internal cache entry record.

use std::sync::Arc;
use std::time::Instant;
use trellis_common::{DocumentVersion, LanguageKind};

/// One cached artifact together with the document state it was produced from.
///
/// The document key is the map key, not stored here. An entry answers a
/// lookup only while it is fresh: the stored version must be at least the
/// requested version and the stored kind must match exactly.
#[derive(Debug)]
pub(crate) struct CacheEntry<A> {
    /// Document version the artifact was produced at.
    pub(crate) version: DocumentVersion,

    /// Content-type classification at production time. A kind change
    /// invalidates the artifact even when the version is unchanged.
    pub(crate) kind: LanguageKind,

    /// The derived artifact, shared with callers by reference count.
    pub(crate) artifact: Arc<A>,

    /// Updated on every hit and insert; both the capacity eviction policy
    /// and the expiry sweep select victims by this timestamp.
    pub(crate) last_access: Instant,
}

impl<A> CacheEntry<A> {
    /// Creates an entry stamped with the current time.
    pub(crate) fn new(version: DocumentVersion, kind: LanguageKind, artifact: Arc<A>) -> Self {
        Self {
            version,
            kind,
            artifact,
            last_access: Instant::now(),
        }
    }

    /// Returns `true` if this entry answers a request for the given
    /// version and kind without recomputation.
    pub(crate) fn is_fresh(&self, version: DocumentVersion, kind: LanguageKind) -> bool {
        self.version.is_at_least(version) && self.kind == kind
    }

    /// Marks the entry as just used.
    pub(crate) fn touch(&mut self, now: Instant) {
        self.last_access = now;
    }
}
