//! Content services of the typing tutor.
//!
//! This crate provides everything the HTTP layer serves:
//! - A read-only content store abstraction with file-system and in-memory backends
//! - An unbiased random word sampler (Fisher–Yates)
//! - The trigraph service (word lists and random word samples)
//! - The collection catalog service (languages, snippet collections, snippets)
//! - Validation helpers for GitHub raw-file URLs
//!
//! All operations are read-only. Every failure is reported as a
//! [`ContentError`](error::ContentError).

/// Error taxonomy shared by stores and services.
pub mod error;

/// Static content data model.
pub mod model;

/// Random subset selection.
pub mod sampler;

/// Read-only storage abstraction.
pub mod store;

/// Trigraph and catalog services.
pub mod service;

/// GitHub raw URL and fetched content validation.
pub mod github;

/// File-system helpers used by the file-system store.
///
/// Not exposed
pub(crate) mod io;

pub use error::{ContentError, StoreError};
pub use sampler::Sampler;
pub use service::catalog::CatalogService;
pub use service::trigraph::TrigraphService;
pub use store::{ContentStore, FsStore, MemoryStore};
