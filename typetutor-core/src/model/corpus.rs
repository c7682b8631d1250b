use serde::{Deserialize, Serialize};

/// A named word list used for finger drills.
///
/// Word order is whatever the persisted file holds; consumers never rely on it.
///
/// # Invariants
/// - `words` never contains empty tokens
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordCorpus {
	name: String,
	words: Vec<String>,
}

impl WordCorpus {
	/// Builds a corpus from raw text, splitting on runs of whitespace.
	pub fn parse(name: &str, text: &str) -> Self {
		Self {
			name: name.to_owned(),
			words: text.split_whitespace().map(str::to_owned).collect(),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}
