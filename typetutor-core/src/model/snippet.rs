use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Maximum number of unknown fields a snippet may carry in `extra`.
pub const MAX_EXTRA_FIELDS: usize = 16;

/// Optional stored field that remembers whether it was written as `null`.
///
/// - `None`: the key was absent and is not serialized
/// - `Some(None)`: the key was stored as `null` and is written back as `null`
/// - `Some(Some(v))`: the stored value
pub type StoredField<T> = Option<Option<T>>;

/// Deserializes a present key into `Some`, so an explicit `null` becomes `Some(None)`.
fn stored<'de, D, T>(deserializer: D) -> Result<StoredField<T>, D::Error>
where
	D: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<T>::deserialize(deserializer).map(Some)
}

/// One typing exercise of a collection.
///
/// Known fields are enumerated; anything else found in the stored record is
/// kept in `extra`. Every field is written back exactly as stored: absent
/// keys stay absent, `null` stays `null`, an empty `tags` stays `[]`.
/// `extra` is bounded by [`MAX_EXTRA_FIELDS`].
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Snippet {
	/// Text the user types.
	pub code: String,
	#[serde(default, deserialize_with = "stored", skip_serializing_if = "Option::is_none")]
	pub title: StoredField<String>,
	#[serde(default, deserialize_with = "stored", skip_serializing_if = "Option::is_none")]
	pub description: StoredField<String>,
	#[serde(default, deserialize_with = "stored", skip_serializing_if = "Option::is_none")]
	pub tags: StoredField<Vec<String>>,
	#[serde(default, deserialize_with = "stored", skip_serializing_if = "Option::is_none")]
	pub difficulty: StoredField<String>,
	#[serde(default, deserialize_with = "stored", skip_serializing_if = "Option::is_none")]
	pub language: StoredField<String>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Snippet {
	pub fn title(&self) -> Option<&str> {
		self.title.as_ref().and_then(|t| t.as_deref())
	}

	/// Tags of the snippet; empty when absent or `null`.
	pub fn tags(&self) -> &[String] {
		self.tags.as_ref().and_then(|t| t.as_deref()).unwrap_or_default()
	}
}

/// A snippet annotated with its 0-based position in its collection.
///
/// Serialized flat: `{ "code": ..., "title": ..., "index": 3 }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IndexedSnippet {
	#[serde(flatten)]
	pub snippet: Snippet,
	pub index: usize,
}

/// A named, ordered set of snippets for one language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CodeCollection {
	#[serde(default)]
	pub id: String,
	#[serde(default)]
	pub name: String,
	#[serde(default)]
	pub description: String,
	#[serde(default)]
	pub icon: String,
	#[serde(default)]
	pub difficulty: String,
	#[serde(default)]
	pub language: String,
	pub snippets: Vec<Snippet>,
}

impl CodeCollection {
	/// Snippets annotated with their position, in stored order.
	pub fn indexed(&self) -> Vec<IndexedSnippet> {
		self.snippets
			.iter()
			.cloned()
			.enumerate()
			.map(|(index, snippet)| IndexedSnippet { snippet, index })
			.collect()
	}

	/// Union of all snippet tags, in first-seen order.
	pub fn tags(&self) -> Vec<String> {
		let mut tags: Vec<String> = Vec::new();
		for tag in self.snippets.iter().flat_map(Snippet::tags) {
			if !tags.contains(tag) {
				tags.push(tag.clone());
			}
		}
		tags
	}

	/// Summary used when listing the collections of a language.
	pub fn summary(&self) -> CollectionSummary {
		CollectionSummary {
			id: self.id.clone(),
			name: self.name.clone(),
			description: self.description.clone(),
			icon: self.icon.clone(),
			difficulty: self.difficulty.clone(),
			language: self.language.clone(),
			snippet_count: self.snippets.len(),
			tags: self.tags(),
		}
	}
}

/// Collection metadata without its snippets.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSummary {
	pub id: String,
	pub name: String,
	pub description: String,
	pub icon: String,
	pub difficulty: String,
	pub language: String,
	pub snippet_count: usize,
	pub tags: Vec<String>,
}

/// Sort rank of a difficulty label. Unknown labels sort last.
pub fn difficulty_rank(difficulty: &str) -> u8 {
	match difficulty {
		"beginner" => 1,
		"intermediate" => 2,
		"advanced" => 3,
		_ => 99,
	}
}

/// A snippet drawn at random from every collection of a language.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RandomSnippet {
	pub snippet: IndexedSnippet,
	pub collection_id: String,
	pub collection_name: String,
	pub total_snippets: usize,
}
