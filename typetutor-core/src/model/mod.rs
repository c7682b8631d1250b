//! Data model of the static content served by the services.
//!
//! - Word corpora used by trigraph drills (`WordCorpus`)
//! - Snippet collections grouped by programming language (`CodeCollection`, `Snippet`)
//! - The language catalog (`LanguageCatalog`)

/// Whitespace-delimited word lists.
pub mod corpus;

/// Code snippet collections and their derived views.
pub mod snippet;

/// Programming languages offered by the collection catalog.
pub mod language;
