//! Edit-protocol version counters for open documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The version counter of an open document.
///
/// Editors bump the version on every change notification, so versions are
/// monotonically increasing per key while a document stays open. Consumers
/// must not assume monotonicity across calls — out-of-order and duplicate
/// requests for an already-current version are tolerated by comparing with
/// [`is_at_least`](Self::is_at_least) rather than strict equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentVersion(i32);

impl DocumentVersion {
    /// The version assigned when a document is first opened.
    pub const INITIAL: DocumentVersion = DocumentVersion(1);

    /// Creates a version from a raw counter value.
    pub fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw counter value.
    pub fn get(self) -> i32 {
        self.0
    }

    /// Returns the next version (saturating at `i32::MAX`).
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns `true` if this version is the same as or newer than `other`.
    ///
    /// This is the freshness comparison used by the artifact cache: an
    /// artifact produced at version `n` still answers a request for any
    /// version `<= n`.
    pub fn is_at_least(self, other: DocumentVersion) -> bool {
        self.0 >= other.0
    }
}

impl fmt::Display for DocumentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_get_roundtrip() {
        let v = DocumentVersion::new(42);
        assert_eq!(v.get(), 42);
    }

    #[test]
    fn initial_is_one() {
        assert_eq!(DocumentVersion::INITIAL.get(), 1);
    }

    #[test]
    fn next_increments() {
        assert_eq!(DocumentVersion::new(3).next(), DocumentVersion::new(4));
    }

    #[test]
    fn next_saturates() {
        let v = DocumentVersion::new(i32::MAX);
        assert_eq!(v.next(), v);
    }

    #[test]
    fn is_at_least_accepts_equal_and_newer() {
        let stored = DocumentVersion::new(5);
        assert!(stored.is_at_least(DocumentVersion::new(4)));
        assert!(stored.is_at_least(DocumentVersion::new(5)));
        assert!(!stored.is_at_least(DocumentVersion::new(6)));
    }

    #[test]
    fn ordering_follows_raw_value() {
        assert!(DocumentVersion::new(1) < DocumentVersion::new(2));
    }

    #[test]
    fn serde_roundtrip_is_transparent() {
        let v = DocumentVersion::new(7);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, "7");
        let back: DocumentVersion = serde_json::from_str(&json).unwrap();
        assert_eq!(v, back);
    }
}
