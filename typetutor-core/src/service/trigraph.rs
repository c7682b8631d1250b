use std::sync::Arc;

use tracing::{debug, error};

use crate::error::{ContentError, StoreError};
use crate::model::corpus::WordCorpus;
use crate::sampler::Sampler;
use crate::store::{ContentStore, validate_segment};

/// Directory of the store holding the word lists.
pub const TRIGRAPH_DIR: &str = "trigraphs";

/// Extension of a word list file.
pub const TRIGRAPH_EXTENSION: &str = "txt";

/// Number of words returned when the request does not say.
pub const DEFAULT_WORD_COUNT: usize = 20;

/// Parses the `count` query parameter.
///
/// - absent or empty → [`DEFAULT_WORD_COUNT`]
/// - a non-negative integer → that value
/// - anything else, negative numbers included → `InvalidArgument`
pub fn parse_count(raw: Option<&str>) -> Result<usize, ContentError> {
	match raw.map(str::trim) {
		None | Some("") => Ok(DEFAULT_WORD_COUNT),
		Some(s) => s.parse::<usize>().map_err(|_| {
			ContentError::InvalidArgument(format!("count must be a non-negative integer, got {s:?}"))
		}),
	}
}

/// Serves trigraph word lists.
pub struct TrigraphService {
	store: Arc<dyn ContentStore>,
	sampler: Sampler,
}

impl TrigraphService {
	pub fn new(store: Arc<dyn ContentStore>, sampler: Sampler) -> Self {
		Self { store, sampler }
	}

	/// Names of every available corpus, sorted.
	///
	/// An empty store yields an empty list.
	///
	/// # Errors
	/// `StoreUnavailable` if the trigraph directory cannot be enumerated,
	/// including when it does not exist.
	pub fn list_corpora(&self) -> Result<Vec<String>, ContentError> {
		self.store.list(TRIGRAPH_DIR, TRIGRAPH_EXTENSION).map_err(|e| {
			error!("Error reading trigraphs directory: {e}");
			ContentError::StoreUnavailable(e.to_string())
		})
	}

	/// Loads and tokenizes a corpus.
	///
	/// # Errors
	/// - `InvalidArgument` if `name` is empty or not a plain name
	/// - `NotFound` if the corpus does not exist or cannot be read
	pub fn load_corpus(&self, name: &str) -> Result<WordCorpus, ContentError> {
		validate_segment("Trigraph name", name)?;

		let path = format!("{TRIGRAPH_DIR}/{name}.{TRIGRAPH_EXTENSION}");
		let text = self.store.read(&path).map_err(|e| {
			match &e {
				StoreError::NotFound(_) => debug!("Trigraph file {path} not found"),
				StoreError::Unavailable { .. } => error!("Error reading trigraph file {path}: {e}"),
			}
			ContentError::NotFound(format!("Failed to read trigraph file {name}."))
		})?;

		Ok(WordCorpus::parse(name, &text))
	}

	/// Random words from the named corpus.
	///
	/// Returns `min(count, corpus size)` distinct positions of the corpus in
	/// random order.
	pub fn get_sample(&self, name: &str, count: usize) -> Result<Vec<String>, ContentError> {
		let corpus = self.load_corpus(name)?;
		debug!(corpus = corpus.name(), available = corpus.len(), count, "sampling words");
		Ok(self.sampler.sample(corpus.words(), count))
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use crate::store::MemoryStore;

	use super::*;

	fn service(store: MemoryStore) -> TrigraphService {
		TrigraphService::new(Arc::new(store), Sampler::seeded(1))
	}

	fn fixture() -> MemoryStore {
		MemoryStore::new()
			.with("trigraphs/the.txt", "the then there other bathe\nthese lathe\n\n  theme  thesis father")
			.with("trigraphs/ing.txt", "sing ring king")
			.with("trigraphs/README.md", "not a corpus")
	}

	#[test]
	fn lists_corpora_without_suffix() {
		assert_eq!(service(fixture()).list_corpora().unwrap(), vec!["ing", "the"]);
	}

	#[test]
	fn missing_directory_is_store_unavailable() {
		let svc = service(MemoryStore::new().with("code-collections/languages.json", "[]"));
		assert!(matches!(svc.list_corpora(), Err(ContentError::StoreUnavailable(_))));
	}

	#[test]
	fn sample_draws_requested_count() {
		let svc = service(fixture());
		let words = svc.get_sample("the", 5).unwrap();
		assert_eq!(words.len(), 5);

		let corpus = svc.load_corpus("the").unwrap();
		assert!(words.iter().all(|w| corpus.words().contains(w)));
		assert_eq!(words.iter().collect::<HashSet<_>>().len(), 5);
	}

	#[test]
	fn sample_larger_than_corpus_returns_all() {
		let mut words = service(fixture()).get_sample("ing", 20).unwrap();
		words.sort();
		assert_eq!(words, vec!["king", "ring", "sing"]);
	}

	#[test]
	fn zero_count_is_empty() {
		assert!(service(fixture()).get_sample("ing", 0).unwrap().is_empty());
	}

	#[test]
	fn unknown_corpus_is_not_found() {
		assert!(matches!(service(fixture()).get_sample("xyz", 5), Err(ContentError::NotFound(_))));
	}

	#[test]
	fn traversal_names_are_rejected() {
		let svc = service(fixture());
		assert!(matches!(svc.get_sample("../secret", 5), Err(ContentError::InvalidArgument(_))));
		assert!(matches!(svc.get_sample("", 5), Err(ContentError::InvalidArgument(_))));
	}

	#[test]
	fn count_parsing() {
		assert_eq!(parse_count(None).unwrap(), DEFAULT_WORD_COUNT);
		assert_eq!(parse_count(Some("")).unwrap(), DEFAULT_WORD_COUNT);
		assert_eq!(parse_count(Some("5")).unwrap(), 5);
		assert_eq!(parse_count(Some("0")).unwrap(), 0);
		assert!(matches!(parse_count(Some("-3")), Err(ContentError::InvalidArgument(_))));
		assert!(matches!(parse_count(Some("ten")), Err(ContentError::InvalidArgument(_))));
		assert!(matches!(parse_count(Some("2.5")), Err(ContentError::InvalidArgument(_))));
	}
}
