//! Registry of currently-open documents.

use crate::snapshot::DocumentSnapshot;
use std::collections::HashMap;
use trellis_common::{DocumentKey, DocumentVersion, LanguageKind};

/// One open document's mutable state.
#[derive(Debug)]
struct OpenDocument {
    version: DocumentVersion,
    kind: LanguageKind,
    text: String,
}

/// Registry of every document the editor currently has open.
///
/// The store is fed by the editor-facing layer: `open` on a didOpen
/// notification, `update` on every change, `close` on didClose. Versions
/// are monotonically increasing per key while a document stays open.
/// Closing a document does not invalidate derived artifacts by itself;
/// the caller is responsible for also notifying the artifact cache.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocumentKey, OpenDocument>,
}

impl DocumentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            documents: HashMap::new(),
        }
    }

    /// Registers a document as open and returns its initial version.
    ///
    /// Re-opening a key that is already open resets it: the text and kind
    /// are replaced and the version starts over at
    /// [`DocumentVersion::INITIAL`], matching editor close/reopen semantics.
    pub fn open(
        &mut self,
        key: DocumentKey,
        kind: LanguageKind,
        text: impl Into<String>,
    ) -> DocumentVersion {
        log::debug!("document opened: {key} ({kind})");
        let version = DocumentVersion::INITIAL;
        self.documents.insert(
            key,
            OpenDocument {
                version,
                kind,
                text: text.into(),
            },
        );
        version
    }

    /// Replaces a document's text and bumps its version by one.
    ///
    /// Returns the new version, or `None` if the key is not open.
    pub fn update(&mut self, key: &DocumentKey, text: impl Into<String>) -> Option<DocumentVersion> {
        let doc = self.documents.get_mut(key)?;
        doc.version = doc.version.next();
        doc.text = text.into();
        Some(doc.version)
    }

    /// Re-tags a document's content type without a version bump.
    ///
    /// Returns `false` if the key is not open. A kind change invalidates
    /// derived artifacts even though the version is unchanged; the artifact
    /// cache detects this by comparing kinds on every lookup.
    pub fn set_kind(&mut self, key: &DocumentKey, kind: LanguageKind) -> bool {
        match self.documents.get_mut(key) {
            Some(doc) => {
                doc.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Unregisters a document. Returns `false` if the key was not open.
    pub fn close(&mut self, key: &DocumentKey) -> bool {
        let removed = self.documents.remove(key).is_some();
        if removed {
            log::debug!("document closed: {key}");
        }
        removed
    }

    /// Returns a snapshot of an open document, or `None` if the key is not open.
    pub fn snapshot(&self, key: &DocumentKey) -> Option<DocumentSnapshot> {
        let doc = self.documents.get(key)?;
        Some(DocumentSnapshot {
            key: key.clone(),
            version: doc.version,
            kind: doc.kind,
            text: doc.text.clone(),
        })
    }

    /// Returns `true` if the key is currently open.
    pub fn contains(&self, key: &DocumentKey) -> bool {
        self.documents.contains_key(key)
    }

    /// Returns the number of open documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if no documents are open.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
