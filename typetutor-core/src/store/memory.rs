use std::collections::BTreeMap;

use crate::error::StoreError;

use super::ContentStore;

/// In-memory content store.
///
/// Directories exist implicitly: a directory is listed as present as soon as
/// one resource lives below it.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
	resources: BTreeMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a resource at a logical path.
	pub fn insert(&mut self, path: impl Into<String>, text: impl Into<String>) -> &mut Self {
		self.resources.insert(trim_path(&path.into()).to_owned(), text.into());
		self
	}

	/// Builder-style variant of [`insert`](Self::insert).
	pub fn with(mut self, path: impl Into<String>, text: impl Into<String>) -> Self {
		self.insert(path, text);
		self
	}

	/// Relative paths of every resource below `dir`.
	fn children<'a>(&'a self, dir: &str) -> Option<impl Iterator<Item = &'a str> + 'a> {
		let dir = trim_path(dir);
		let prefix = if dir.is_empty() { String::new() } else { format!("{dir}/") };
		let mut entries = self
			.resources
			.keys()
			.filter_map(move |k| k.strip_prefix(prefix.as_str()))
			.peekable();
		entries.peek()?;
		Some(entries)
	}
}

fn trim_path(path: &str) -> &str {
	path.trim_matches('/')
}

impl ContentStore for MemoryStore {
	fn list(&self, dir: &str, extension: &str) -> Result<Vec<String>, StoreError> {
		let children = self.children(dir).ok_or_else(|| StoreError::NotFound(dir.to_owned()))?;
		let suffix = format!(".{extension}");
		let mut names: Vec<String> = children
			.filter(|rel| !rel.contains('/'))
			.filter_map(|rel| rel.strip_suffix(suffix.as_str()))
			.filter(|stem| !stem.is_empty())
			.map(str::to_owned)
			.collect();
		names.sort();
		Ok(names)
	}

	fn list_dirs(&self, dir: &str) -> Result<Vec<String>, StoreError> {
		let children = self.children(dir).ok_or_else(|| StoreError::NotFound(dir.to_owned()))?;
		let mut names: Vec<String> = children
			.filter_map(|rel| rel.split_once('/').map(|(first, _)| first.to_owned()))
			.collect();
		names.sort();
		names.dedup();
		Ok(names)
	}

	fn read(&self, path: &str) -> Result<String, StoreError> {
		self.resources
			.get(trim_path(path))
			.cloned()
			.ok_or_else(|| StoreError::NotFound(path.to_owned()))
	}
}
