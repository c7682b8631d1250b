//! Read-only services consumed by the HTTP layer.
//!
//! Each service owns a handle to the content store it was built with and
//! translates every store or parse failure into a [`ContentError`](crate::error::ContentError).

/// Trigraph word lists and random word samples.
pub mod trigraph;

/// Languages, snippet collections and snippets.
pub mod catalog;
