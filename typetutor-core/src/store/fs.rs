use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::StoreError;
use crate::io;

use super::ContentStore;

/// Content store backed by a directory tree.
///
/// Logical paths are resolved under `root`; anything that would escape the
/// root is reported as not found.
#[derive(Debug, Clone)]
pub struct FsStore {
	root: PathBuf,
}

impl FsStore {
	/// Creates a store rooted at `root`. Both `"."` and `"./"` resolve to the
	/// current working directory. The directory is not required to exist yet.
	pub fn new<P: AsRef<Path>>(root: P) -> Self {
		Self {
			root: io::normalize_folder(root.as_ref()),
		}
	}

	/// Returns the root directory of this store.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn resolve(&self, logical: &str) -> Result<PathBuf, StoreError> {
		io::resolve_under(&self.root, logical).ok_or_else(|| StoreError::NotFound(logical.to_owned()))
	}
}

fn map_io(path: &Path, logical: &str, err: std::io::Error) -> StoreError {
	if err.kind() == ErrorKind::NotFound {
		StoreError::NotFound(logical.to_owned())
	} else {
		StoreError::Unavailable {
			path: path.display().to_string(),
			source: err,
		}
	}
}

impl ContentStore for FsStore {
	fn list(&self, dir: &str, extension: &str) -> Result<Vec<String>, StoreError> {
		let path = self.resolve(dir)?;
		debug!(path = %path.display(), extension, "listing files");
		io::list_files(&path, extension).map_err(|e| map_io(&path, dir, e))
	}

	fn list_dirs(&self, dir: &str) -> Result<Vec<String>, StoreError> {
		let path = self.resolve(dir)?;
		io::list_dirs(&path).map_err(|e| map_io(&path, dir, e))
	}

	fn read(&self, logical: &str) -> Result<String, StoreError> {
		let path = self.resolve(logical)?;
		debug!(path = %path.display(), "reading resource");
		io::read_text(&path).map_err(|e| map_io(&path, logical, e))
	}
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn reads_and_lists_under_root() {
		let dir = tempfile::tempdir().unwrap();
		fs::create_dir_all(dir.path().join("trigraphs")).unwrap();
		fs::write(dir.path().join("trigraphs/ing.txt"), "sing ring").unwrap();

		let store = FsStore::new(dir.path());
		assert_eq!(store.list("trigraphs", "txt").unwrap(), vec!["ing"]);
		assert_eq!(store.read("trigraphs/ing.txt").unwrap(), "sing ring");
	}

	#[test]
	fn missing_resources_are_not_found() {
		let dir = tempfile::tempdir().unwrap();
		let store = FsStore::new(dir.path());

		assert!(matches!(store.read("trigraphs/nope.txt"), Err(StoreError::NotFound(_))));
		assert!(matches!(store.list("trigraphs", "txt"), Err(StoreError::NotFound(_))));
		assert!(matches!(store.read("../secret.txt"), Err(StoreError::NotFound(_))));
	}
}
