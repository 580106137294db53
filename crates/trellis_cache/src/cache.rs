//! The versioned artifact cache.
//!
//! [`ArtifactCache`] memoizes a caller-supplied production function that
//! derives an expensive language model from a document. It sits on the hot
//! path of every editor interaction: each keystroke can trigger a lookup,
//! so hits are a map probe plus a timestamp update, and all mutation goes
//! through one mutex held for the duration of a single bookkeeping step.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use trellis_common::{DocumentKey, DocumentVersion, LanguageKind};

use crate::config::CacheConfig;
use crate::entry::CacheEntry;
use crate::error::CacheError;
use crate::sweep::Sweeper;

/// The entry map guarded by the cache's mutex.
///
/// Owned exclusively by the cache; the sweeper thread shares it through the
/// same mutex, so every removal path (capacity eviction, explicit removal,
/// sweep expiry) is an idempotent map operation and composes with the others.
#[derive(Debug)]
pub(crate) struct CacheState<A> {
    entries: HashMap<DocumentKey, CacheEntry<A>>,
}

impl<A> CacheState<A> {
    pub(crate) fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts an entry, evicting least-recently-accessed entries first if
    /// the key is brand new and the map is at capacity.
    ///
    /// Overwriting an existing key never evicts: the entry count is
    /// unchanged. The bound is enforced with `>=` rather than an exact
    /// equality check so the map self-heals if the count ever drifts over.
    fn insert_bounded(&mut self, key: DocumentKey, entry: CacheEntry<A>, max_entries: usize) {
        if !self.entries.contains_key(&key) {
            while self.entries.len() >= max_entries {
                match self.oldest_key() {
                    Some(oldest) => {
                        self.entries.remove(&oldest);
                        log::trace!("evicted artifact for {oldest}");
                    }
                    None => break,
                }
            }
        }
        self.entries.insert(key, entry);
    }

    /// Returns the key with the globally smallest `last_access`.
    ///
    /// A linear scan is fine at the expected scale (single- to double-digit
    /// entry counts of parsed-document artifacts). Ties go to whichever
    /// entry the iteration visits first.
    fn oldest_key(&self) -> Option<DocumentKey> {
        self.entries
            .iter()
            .min_by_key(|(_, entry)| entry.last_access)
            .map(|(key, _)| key.clone())
    }

    /// Removes every entry whose last access is before `cutoff`.
    ///
    /// Returns the number of entries removed. Called by the sweeper thread.
    pub(crate) fn remove_idle(&mut self, cutoff: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.last_access >= cutoff);
        before - self.entries.len()
    }
}

/// Memoized, staleness-aware access to a production function
/// `produce(document) -> artifact`, bounded by entry count and idle time.
///
/// Type parameters: `D` is the opaque document handle passed through to the
/// producer, `A` the artifact it derives, and `E` the producer's error type.
/// The producer is supplied once at construction and treated as a
/// deterministic pure function of the document. It must not call back into
/// the cache for the same key; reentrancy is not supported (documented
/// constraint, not enforced).
///
/// Artifacts are handed out as [`Arc`] clones: removal drops the cache's
/// reference while outstanding readers keep theirs.
pub struct ArtifactCache<D, A, E> {
    state: Arc<Mutex<CacheState<A>>>,
    produce: Box<dyn Fn(&D) -> Result<A, E> + Send + Sync>,
    max_entries: usize,
    sweeper: Mutex<Option<Sweeper>>,
}

impl<D, A, E> ArtifactCache<D, A, E> {
    /// Constructs a cache, validating the configuration and starting the
    /// background expiry sweep if the configured interval is positive.
    pub fn new<F>(config: CacheConfig, produce: F) -> Result<Self, CacheError>
    where
        F: Fn(&D) -> Result<A, E> + Send + Sync + 'static,
        A: Send + Sync + 'static,
    {
        config.validate()?;

        let state = Arc::new(Mutex::new(CacheState::new()));
        let sweeper = if config.sweep_enabled() {
            Some(Sweeper::spawn(Arc::clone(&state), config.sweep_interval)?)
        } else {
            None
        };

        Ok(Self {
            state,
            produce: Box::new(produce),
            max_entries: config.max_entries,
            sweeper: Mutex::new(sweeper),
        })
    }

    /// Returns the artifact for the document identified by `key`.
    ///
    /// If a cached entry exists with a stored version of at least `version`
    /// and the same `kind`, its last-access time is updated and its artifact
    /// returned without invoking the producer. Otherwise the producer runs
    /// on `document` and the result is stored under `key` (overwriting any
    /// stale entry) before being returned.
    ///
    /// A producer failure propagates unchanged and leaves the map in its
    /// prior state for `key`. An empty key is degenerate: the producer runs
    /// but nothing is stored.
    ///
    /// The entry mutex is not held while the producer runs, so an expensive
    /// parse never blocks lookups for unrelated keys. Two racing calls for
    /// the same stale key may both invoke the producer; the second write
    /// wins, which is sound for a deterministic producer.
    pub fn get(
        &self,
        key: &DocumentKey,
        version: DocumentVersion,
        kind: LanguageKind,
        document: &D,
    ) -> Result<Arc<A>, E> {
        if key.is_empty() {
            return (self.produce)(document).map(Arc::new);
        }

        {
            let mut state = self.state.lock().unwrap();
            if let Some(entry) = state.entries.get_mut(key) {
                if entry.is_fresh(version, kind) {
                    entry.touch(Instant::now());
                    return Ok(Arc::clone(&entry.artifact));
                }
            }
        }

        let artifact = Arc::new((self.produce)(document)?);
        let mut state = self.state.lock().unwrap();
        state.insert_bounded(
            key.clone(),
            CacheEntry::new(version, kind, Arc::clone(&artifact)),
            self.max_entries,
        );
        Ok(artifact)
    }

    /// Discards the entry for a document that was closed.
    ///
    /// Returns `true` if an entry was present. Removing an absent key is a
    /// no-op, so callers may invoke this unconditionally on every close.
    pub fn on_document_removed(&self, key: &DocumentKey) -> bool {
        self.state.lock().unwrap().entries.remove(key).is_some()
    }

    /// Stops the background sweep and discards all entries.
    ///
    /// Idempotent. The cache keeps working afterwards (lookups store and
    /// hit as usual) but no further automatic time-based expiry occurs.
    pub fn dispose(&self) {
        if let Some(sweeper) = self.sweeper.lock().unwrap().take() {
            sweeper.stop();
        }
        self.state.lock().unwrap().entries.clear();
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.state.lock().unwrap().entries.len()
    }

    /// Returns `true` if no entries are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if an entry (fresh or stale) exists for `key`.
    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.state.lock().unwrap().entries.contains_key(key)
    }
}

impl<D, A, E> Drop for ArtifactCache<D, A, E> {
    /// Releases the sweeper thread on every exit path. Entries are dropped
    /// with the cache itself.
    fn drop(&mut self) {
        if let Ok(mut guard) = self.sweeper.lock() {
            if let Some(sweeper) = guard.take() {
                sweeper.stop();
            }
        }
    }
}
