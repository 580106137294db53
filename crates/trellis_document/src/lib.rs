//! Open-document tracking for the Trellis language tooling.
//!
//! This crate provides the [`DocumentStore`] for tracking every document the
//! editor currently has open, and [`DocumentSnapshot`] as the immutable view
//! handed to downstream consumers (most importantly the artifact cache's
//! production function).

#![warn(missing_docs)]

pub mod snapshot;
pub mod store;

pub use snapshot::DocumentSnapshot;
pub use store::DocumentStore;
