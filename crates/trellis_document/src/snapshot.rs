//! Immutable point-in-time views of open documents.

use trellis_common::{DocumentKey, DocumentVersion, LanguageKind};

/// An immutable view of one open document at a point in time.
///
/// Snapshots are what downstream consumers see: the artifact cache's
/// production function receives a snapshot and derives a language model
/// (parsed template, type-check artifact) from it. The snapshot carries
/// everything needed to identify and interpret the text, so producers never
/// reach back into the store.
#[derive(Debug, Clone)]
pub struct DocumentSnapshot {
    /// Stable identity of the document.
    pub key: DocumentKey,

    /// Version of the document this snapshot was taken at.
    pub version: DocumentVersion,

    /// Content-type classification at snapshot time.
    pub kind: LanguageKind,

    /// The full document text.
    pub text: String,
}
