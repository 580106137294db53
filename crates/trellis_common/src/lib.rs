//! Shared foundational types for the Trellis language tooling.
//!
//! This crate provides the document identity primitives consumed throughout
//! the workspace: [`DocumentKey`] for stable document identity, [`DocumentVersion`]
//! for edit-protocol version counters, and [`LanguageKind`] for content-type
//! classification of open documents.

#![warn(missing_docs)]

pub mod key;
pub mod kind;
pub mod version;

pub use key::DocumentKey;
pub use kind::{LanguageKind, ParseLanguageKindError};
pub use version::DocumentVersion;
