use std::sync::Arc;

use tracing::{error, warn};

use crate::error::{ContentError, StoreError};
use crate::model::language::LanguageCatalog;
use crate::model::snippet::{
	CodeCollection, CollectionSummary, IndexedSnippet, MAX_EXTRA_FIELDS, RandomSnippet, difficulty_rank,
};
use crate::sampler::Sampler;
use crate::store::{ContentStore, validate_segment};

/// Root directory of the code collections in the store.
pub const COLLECTIONS_DIR: &str = "code-collections";

/// Catalog resource, relative to the store root.
pub const LANGUAGES_PATH: &str = "code-collections/languages.json";

const COLLECTION_EXTENSION: &str = "json";

/// Serves the language catalog and the snippet collections.
///
/// # Layout
/// - `code-collections/languages.json`: the [`LanguageCatalog`]
/// - `code-collections/<language>/<collection id>.json`: one [`CodeCollection`]
pub struct CatalogService {
	store: Arc<dyn ContentStore>,
	sampler: Sampler,
}

impl CatalogService {
	pub fn new(store: Arc<dyn ContentStore>, sampler: Sampler) -> Self {
		Self { store, sampler }
	}

	/// Returns the whole language catalog.
	///
	/// # Errors
	/// - `StoreUnavailable` if the catalog cannot be read (missing included)
	/// - `DataCorrupt` if it is not a valid catalog
	pub fn list_languages(&self) -> Result<LanguageCatalog, ContentError> {
		let text = self.store.read(LANGUAGES_PATH).map_err(|e| {
			error!("Error reading languages file: {e}");
			ContentError::StoreUnavailable(e.to_string())
		})?;

		serde_json::from_str(&text).map_err(|e| {
			error!("Error parsing languages file: {e}");
			ContentError::DataCorrupt(format!("{LANGUAGES_PATH}: {e}"))
		})
	}

	/// Loads one collection.
	///
	/// # Errors
	/// - `InvalidArgument` if either parameter is empty or not a plain name
	/// - `NotFound` if no such collection exists
	/// - `StoreUnavailable` if it exists but cannot be read
	/// - `DataCorrupt` if it is not JSON, lacks a `snippets` sequence, or a
	///   snippet is malformed
	pub fn load_collection(&self, language: &str, collection_id: &str) -> Result<CodeCollection, ContentError> {
		if language.is_empty() || collection_id.is_empty() {
			return Err(ContentError::InvalidArgument("Missing required parameters".to_owned()));
		}
		validate_segment("language code", language)?;
		validate_segment("collection id", collection_id)?;

		let path = collection_path(language, collection_id);
		let text = self.store.read(&path).map_err(|e| match e {
			StoreError::NotFound(_) => {
				ContentError::NotFound(format!("Collection not found: {language}/{collection_id}"))
			}
			other => {
				error!("Error reading collection file {path}: {other}");
				ContentError::StoreUnavailable(other.to_string())
			}
		})?;

		parse_collection(&path, collection_id, &text)
	}

	/// Snippets of a collection annotated with their stored position.
	///
	/// The order is exactly the persisted order; `index` runs `0, 1, 2, ...`.
	pub fn get_snippets(&self, language: &str, collection_id: &str) -> Result<Vec<IndexedSnippet>, ContentError> {
		let collection = self.load_collection(language, collection_id).inspect_err(|e| {
			if let ContentError::DataCorrupt(detail) = e {
				error!("Invalid collection format: {detail}");
			}
		})?;
		Ok(collection.indexed())
	}

	/// Every readable collection of a language.
	///
	/// Collections that cannot be read or parsed are skipped with a warning.
	fn collections(&self, language: &str) -> Result<Vec<CodeCollection>, ContentError> {
		validate_segment("Language code", language)?;

		let dir = format!("{COLLECTIONS_DIR}/{language}");
		let ids = self.store.list(&dir, COLLECTION_EXTENSION).map_err(|e| {
			error!("Error reading collections for language {language}: {e}");
			ContentError::NotFound(format!("No collections found for language: {language}"))
		})?;

		let mut collections = Vec::with_capacity(ids.len());
		for id in ids {
			match self.load_collection(language, &id) {
				Ok(collection) => collections.push(collection),
				Err(e) => warn!("Failed to read collection {id}.json: {e}"),
			}
		}
		Ok(collections)
	}

	/// Summaries of every collection of a language.
	///
	/// Sorted by difficulty (beginner, intermediate, advanced, then anything
	/// else) and then by name.
	///
	/// # Errors
	/// `NotFound` if the language has no collection directory.
	pub fn list_collections(&self, language: &str) -> Result<Vec<CollectionSummary>, ContentError> {
		let mut summaries: Vec<CollectionSummary> =
			self.collections(language)?.iter().map(CodeCollection::summary).collect();

		summaries.sort_by(|a, b| {
			difficulty_rank(&a.difficulty)
				.cmp(&difficulty_rank(&b.difficulty))
				.then_with(|| a.name.cmp(&b.name))
		});
		Ok(summaries)
	}

	/// Picks one snippet uniformly among all snippets of all collections of a language.
	///
	/// The returned snippet keeps its index within its own collection.
	///
	/// # Errors
	/// `NotFound` if the language has no collections or no snippets.
	pub fn random_snippet(&self, language: &str) -> Result<RandomSnippet, ContentError> {
		let collections = self.collections(language)?;

		let pool: Vec<(&CodeCollection, usize)> = collections
			.iter()
			.flat_map(|c| (0..c.snippets.len()).map(move |i| (c, i)))
			.collect();

		let (collection, index) = self
			.sampler
			.pick(pool.len())
			.map(|i| pool[i])
			.ok_or_else(|| ContentError::NotFound(format!("No snippets found for language: {language}")))?;

		Ok(RandomSnippet {
			snippet: IndexedSnippet {
				snippet: collection.snippets[index].clone(),
				index,
			},
			collection_id: collection.id.clone(),
			collection_name: collection.name.clone(),
			total_snippets: pool.len(),
		})
	}
}

fn collection_path(language: &str, collection_id: &str) -> String {
	format!("{COLLECTIONS_DIR}/{language}/{collection_id}.{COLLECTION_EXTENSION}")
}

/// Parses a stored collection and enforces its invariants.
fn parse_collection(path: &str, collection_id: &str, text: &str) -> Result<CodeCollection, ContentError> {
	let mut collection: CodeCollection =
		serde_json::from_str(text).map_err(|e| ContentError::DataCorrupt(format!("{path}: {e}")))?;

	if collection.id.is_empty() {
		collection.id = collection_id.to_owned();
	}

	for (position, snippet) in collection.snippets.iter_mut().enumerate() {
		// `index` is derived on every read, never taken from storage.
		snippet.extra.remove("index");
		if snippet.extra.len() > MAX_EXTRA_FIELDS {
			return Err(ContentError::DataCorrupt(format!(
				"{path}: snippet {position} has {} unknown fields (max {MAX_EXTRA_FIELDS})",
				snippet.extra.len()
			)));
		}
	}

	Ok(collection)
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use crate::store::MemoryStore;

	use super::*;

	fn collection_json(id: &str, name: &str, difficulty: &str, codes: &[&str]) -> String {
		let snippets: Vec<Value> = codes
			.iter()
			.map(|c| json!({ "code": c, "title": format!("title {c}"), "tags": [name] }))
			.collect();
		json!({
			"id": id,
			"name": name,
			"description": "",
			"icon": "",
			"difficulty": difficulty,
			"language": "javascript",
			"snippets": snippets
		})
		.to_string()
	}

	fn fixture() -> MemoryStore {
		MemoryStore::new()
			.with(
				"code-collections/languages.json",
				r#"[{"code":"javascript","name":"JavaScript","icon":"js","description":"The web"},
				    {"code":"python","name":"Python"}]"#,
			)
			.with(
				"code-collections/javascript/loops.json",
				collection_json("loops", "Loops", "intermediate", &["for (;;) {}", "while (x) {}"]),
			)
			.with(
				"code-collections/javascript/basics.json",
				collection_json("basics", "Basics", "beginner", &["let a = 1;", "const b = 2;", "var c = 3;"]),
			)
			.with(
				"code-collections/javascript/async.json",
				collection_json("async", "Async", "advanced", &["await x;"]),
			)
			.with("code-collections/javascript/broken.json", r#"{"id":"broken","name":"Broken"}"#)
			.with("code-collections/python/empty.json", collection_json("empty", "Empty", "beginner", &[]))
	}

	fn service(store: MemoryStore) -> CatalogService {
		CatalogService::new(Arc::new(store), Sampler::seeded(9))
	}

	#[test]
	fn languages_are_returned_wholesale() {
		let catalog = service(fixture()).list_languages().unwrap();
		let codes: Vec<&str> = catalog.0.iter().map(|l| l.code.as_str()).collect();
		assert_eq!(codes, vec!["javascript", "python"]);
		assert_eq!(catalog.0[1].icon, "");
	}

	#[test]
	fn missing_catalog_is_store_unavailable() {
		let svc = service(MemoryStore::new());
		assert!(matches!(svc.list_languages(), Err(ContentError::StoreUnavailable(_))));
	}

	#[test]
	fn malformed_catalog_is_data_corrupt() {
		let svc = service(MemoryStore::new().with(LANGUAGES_PATH, "{ not json"));
		assert!(matches!(svc.list_languages(), Err(ContentError::DataCorrupt(_))));
	}

	#[test]
	fn snippets_keep_stored_order_and_index() {
		let snippets = service(fixture()).get_snippets("javascript", "basics").unwrap();
		let indexes: Vec<usize> = snippets.iter().map(|s| s.index).collect();
		let codes: Vec<&str> = snippets.iter().map(|s| s.snippet.code.as_str()).collect();

		assert_eq!(indexes, vec![0, 1, 2]);
		assert_eq!(codes, vec!["let a = 1;", "const b = 2;", "var c = 3;"]);
	}

	#[test]
	fn index_is_stable_across_reads() {
		let svc = service(fixture());
		assert_eq!(
			svc.get_snippets("javascript", "loops").unwrap(),
			svc.get_snippets("javascript", "loops").unwrap()
		);
	}

	#[test]
	fn stored_index_field_is_overridden() {
		let store = MemoryStore::new().with(
			"code-collections/rust/misc.json",
			r#"{"snippets":[{"code":"fn a() {}","index":7},{"code":"fn b() {}"}]}"#,
		);
		let snippets = service(store).get_snippets("rust", "misc").unwrap();
		let out = serde_json::to_value(&snippets).unwrap();
		assert_eq!(out[0]["index"], 0);
		assert_eq!(out[1]["index"], 1);
	}

	#[test]
	fn stored_metadata_passes_through_untouched() {
		let store = MemoryStore::new().with(
			"code-collections/go/plain.json",
			r#"{"snippets":[{"code":"x","tags":[],"title":null},{"code":"y","difficulty":"beginner","extra":[1]}]}"#,
		);
		let snippets = service(store).get_snippets("go", "plain").unwrap();

		assert_eq!(
			serde_json::to_value(&snippets).unwrap(),
			json!([
				{ "code": "x", "tags": [], "title": null, "index": 0 },
				{ "code": "y", "difficulty": "beginner", "extra": [1], "index": 1 }
			])
		);
	}

	#[test]
	fn missing_collection_mentions_language_and_id() {
		let err = service(fixture()).get_snippets("javascript", "nonexistent-id").unwrap_err();
		match err {
			ContentError::NotFound(msg) => {
				assert!(msg.contains("javascript"));
				assert!(msg.contains("nonexistent-id"));
			}
			other => panic!("unexpected error: {other:?}"),
		}
	}

	#[test]
	fn missing_parameters_are_invalid() {
		let svc = service(fixture());
		assert!(matches!(svc.get_snippets("", "basics"), Err(ContentError::InvalidArgument(_))));
		assert!(matches!(svc.get_snippets("javascript", ""), Err(ContentError::InvalidArgument(_))));
	}

	#[test]
	fn collection_without_snippets_is_corrupt() {
		let svc = service(fixture());
		assert!(matches!(svc.get_snippets("javascript", "broken"), Err(ContentError::DataCorrupt(_))));

		let store = MemoryStore::new().with("code-collections/go/odd.json", r#"{"snippets":"nope"}"#);
		assert!(matches!(service(store).get_snippets("go", "odd"), Err(ContentError::DataCorrupt(_))));
	}

	#[test]
	fn too_many_extra_fields_is_corrupt() {
		let mut snippet = serde_json::Map::new();
		snippet.insert("code".into(), json!("x"));
		for i in 0..=MAX_EXTRA_FIELDS {
			snippet.insert(format!("field{i}"), json!(i));
		}
		let store = MemoryStore::new().with(
			"code-collections/go/wide.json",
			json!({ "snippets": [snippet] }).to_string(),
		);
		assert!(matches!(service(store).get_snippets("go", "wide"), Err(ContentError::DataCorrupt(_))));
	}

	#[test]
	fn collections_sorted_by_difficulty_and_skip_broken_files() {
		let summaries = service(fixture()).list_collections("javascript").unwrap();
		let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();

		assert_eq!(ids, vec!["basics", "loops", "async"]);
		assert_eq!(summaries[0].snippet_count, 3);
	}

	#[test]
	fn unknown_language_has_no_collections() {
		let svc = service(fixture());
		assert!(matches!(svc.list_collections("cobol"), Err(ContentError::NotFound(_))));
	}

	#[test]
	fn collection_id_defaults_to_file_stem() {
		let store = MemoryStore::new().with("code-collections/rust/traits.json", r#"{"snippets":[{"code":"trait A {}"}]}"#);
		let summaries = service(store).list_collections("rust").unwrap();
		assert_eq!(summaries[0].id, "traits");
	}

	#[test]
	fn random_snippet_comes_from_the_pool() {
		let svc = service(fixture());
		for _ in 0..20 {
			let random = svc.random_snippet("javascript").unwrap();
			assert_eq!(random.total_snippets, 6);

			let stored = svc.get_snippets("javascript", &random.collection_id).unwrap();
			assert_eq!(stored[random.snippet.index], random.snippet);
		}
	}

	#[test]
	fn random_snippet_without_snippets_is_not_found() {
		assert!(matches!(service(fixture()).random_snippet("python"), Err(ContentError::NotFound(_))));
	}
}
