//! Read-only access to the static content deployment.
//!
//! Services never touch the file system directly: they are handed a
//! [`ContentStore`] at construction. [`FsStore`] serves a directory tree,
//! [`MemoryStore`] serves fixtures.
//!
//! Paths handed to a store are logical, `/`-separated and relative to the
//! store root, e.g. `"code-collections/javascript/basics.json"`.

use crate::error::{ContentError, StoreError};

mod fs;
mod memory;

pub use fs::FsStore;
pub use memory::MemoryStore;

/// Read-only content store.
pub trait ContentStore: Send + Sync {
	/// Lists the names (extension stripped) of regular files directly inside
	/// `dir` whose extension is `extension`. Names are sorted.
	fn list(&self, dir: &str, extension: &str) -> Result<Vec<String>, StoreError>;

	/// Lists the names of the subdirectories of `dir`, sorted.
	fn list_dirs(&self, dir: &str) -> Result<Vec<String>, StoreError>;

	/// Reads a resource as UTF-8 text.
	fn read(&self, path: &str) -> Result<String, StoreError>;
}

/// Checks that a request parameter can be used as a single path segment.
///
/// `kind` names the parameter in the error message.
///
/// # Errors
/// `InvalidArgument` if the value is empty, contains a separator or `..`,
/// or starts with a dot.
pub fn validate_segment(kind: &str, value: &str) -> Result<(), ContentError> {
	if value.is_empty() {
		return Err(ContentError::InvalidArgument(format!("{kind} not provided")));
	}
	if value.contains('/') || value.contains('\\') || value.contains("..") || value.starts_with('.') {
		return Err(ContentError::InvalidArgument(format!("Invalid {kind}: {value}")));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn segments() {
		assert!(validate_segment("language", "javascript").is_ok());
		assert!(validate_segment("collection id", "array-methods_2").is_ok());

		for bad in ["", "..", "a/b", "a\\b", ".hidden", "x..y"] {
			assert!(
				matches!(validate_segment("name", bad), Err(ContentError::InvalidArgument(_))),
				"{bad:?} should be rejected"
			);
		}
	}
}
