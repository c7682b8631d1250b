use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::env;

/// Reads a whole UTF-8 text file into memory.
pub(crate) fn read_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

/// Extracts the base filename without extension.
///
/// Examples:
/// - `"./static/content/trigraphs/the.txt"` → `"the"`
/// - `"basics.json"` → `"basics"`
pub(crate) fn get_filename<P: AsRef<Path>>(input_path: P) -> io::Result<String> {
	let stem = input_path
		.as_ref()
		.file_stem()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no filename"))?;

	Ok(stem.to_string_lossy().to_string())
}

/// Normalize a folder path.
///
/// - `"."` or `"./"` resolves to the current working directory
/// - Other paths are returned as-is (not canonicalized)
pub(crate) fn normalize_folder(input: &Path) -> PathBuf {
	if input == Path::new(".") || input == Path::new("./") {
		env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
	} else {
		input.to_path_buf()
	}
}

/// Joins a `/`-separated logical path onto `root`.
///
/// Returns `None` when the logical path contains anything other than plain
/// names (`..`, `.`, a root or a prefix), so the result always stays under `root`.
pub(crate) fn resolve_under(root: &Path, logical: &str) -> Option<PathBuf> {
	let mut resolved = root.to_path_buf();
	for part in logical.split('/').filter(|p| !p.is_empty()) {
		let mut components = Path::new(part).components();
		match (components.next(), components.next()) {
			(Some(Component::Normal(name)), None) => resolved.push(name),
			_ => return None,
		}
	}
	Some(resolved)
}

/// Lists all files with a given extension in a directory.
///
/// Returns file stems only (no paths, no extension), sorted.
pub(crate) fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if path.is_file() && path.extension() == Some(OsStr::new(extension)) {
			files.push(get_filename(&path)?);
		}
	}

	files.sort();
	Ok(files)
}

/// Lists the names of all subdirectories of a directory, sorted.
pub(crate) fn list_dirs<P: AsRef<Path>>(dir: P) -> io::Result<Vec<String>> {
	let mut dirs = Vec::new();

	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		if entry.path().is_dir() {
			dirs.push(entry.file_name().to_string_lossy().to_string());
		}
	}

	dirs.sort();
	Ok(dirs)
}
