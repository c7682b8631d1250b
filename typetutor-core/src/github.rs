//! Validation of user-supplied GitHub file URLs and of the content fetched from them.
//!
//! Fetching itself is left to the caller; this module only decides which URLs
//! may be fetched and whether the fetched text is usable for typing practice.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Host serving raw GitHub files.
pub const RAW_BASE: &str = "https://raw.githubusercontent.com";

const RAW_PREFIX: &str = "https://raw.githubusercontent.com/";
const BLOB_PREFIX: &str = "https://github.com/";

/// Shortest text accepted for practice, in characters.
pub const MIN_CONTENT_CHARS: usize = 50;
/// Longest text accepted for practice, in characters.
pub const MAX_CONTENT_CHARS: usize = 50_000;
/// Minimum share of printable characters.
pub const MIN_PRINTABLE_RATIO: f64 = 0.8;
/// Largest body worth downloading: [`MAX_CONTENT_CHARS`] characters of at most 4 UTF-8 bytes.
pub const MAX_DOWNLOAD_BYTES: u64 = 4 * MAX_CONTENT_CHARS as u64;

fn too_large() -> ContentError {
	ContentError::InvalidArgument(format!(
		"File is too large for typing practice (max {MAX_CONTENT_CHARS} characters)"
	))
}

/// Rejects a download once it has grown past [`MAX_DOWNLOAD_BYTES`].
///
/// Called with the announced `Content-Length` before reading and with the
/// running byte count while reading.
///
/// # Errors
/// `InvalidArgument` if `bytes` exceeds the cap.
pub fn check_download_size(bytes: u64) -> Result<(), ContentError> {
	if bytes > MAX_DOWNLOAD_BYTES {
		return Err(too_large());
	}
	Ok(())
}

/// Rewrites a GitHub URL to its raw form.
///
/// - `https://raw.githubusercontent.com/...` is returned trimmed, unchanged
/// - `https://github.com/<user>/<repo>/blob/<branch>/<path>` becomes
///   `https://raw.githubusercontent.com/<user>/<repo>/<branch>/<path>`
/// - anything else yields `None`
pub fn to_raw_url(url: &str) -> Option<String> {
	let url = url.trim();
	if url.is_empty() {
		return None;
	}
	if url.starts_with(RAW_PREFIX) {
		return Some(url.to_owned());
	}

	let rest = url.strip_prefix(BLOB_PREFIX)?;
	let mut parts = rest.splitn(5, '/');
	let (user, repo, blob, branch, path) = (parts.next()?, parts.next()?, parts.next()?, parts.next()?, parts.next()?);
	if blob != "blob" || [user, repo, branch, path].iter().any(|p| p.is_empty()) {
		return None;
	}
	Some(format!("{RAW_PREFIX}{user}/{repo}/{branch}/{path}"))
}

/// Components of a validated `raw.githubusercontent.com` URL.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GitHubRawUrl {
	pub user: String,
	pub repo: String,
	pub branch: String,
	pub path: String,
	pub url: String,
}

impl GitHubRawUrl {
	/// Validates a raw URL.
	///
	/// # Errors
	/// `InvalidArgument` if the URL is empty, not of the form
	/// `https://raw.githubusercontent.com/<user>/<repo>/<branch>/<path>`,
	/// or contains `..` in any component.
	pub fn parse(url: &str) -> Result<Self, ContentError> {
		let url = url.trim();
		if url.is_empty() {
			return Err(ContentError::InvalidArgument("URL cannot be empty".to_owned()));
		}

		let malformed = || {
			ContentError::InvalidArgument(
				"URL must be a GitHub raw URL (https://raw.githubusercontent.com/user/repo/branch/path)".to_owned(),
			)
		};
		let rest = url.strip_prefix(RAW_PREFIX).ok_or_else(malformed)?;
		let mut parts = rest.splitn(4, '/');
		let user = parts.next().ok_or_else(malformed)?;
		let repo = parts.next().ok_or_else(malformed)?;
		let branch = parts.next().ok_or_else(malformed)?;
		let path = parts.next().ok_or_else(malformed)?;

		if [user, repo, branch, path].iter().any(|p| p.is_empty()) {
			return Err(malformed());
		}
		if [user, repo, branch, path].iter().any(|p| p.contains("..")) {
			return Err(ContentError::InvalidArgument(
				"URL contains potentially unsafe path components".to_owned(),
			));
		}

		Ok(Self {
			user: user.to_owned(),
			repo: repo.to_owned(),
			branch: branch.to_owned(),
			path: path.to_owned(),
			url: url.to_owned(),
		})
	}

	/// Address to download the file from, `base` standing in for [`RAW_BASE`].
	pub fn fetch_url(&self, base: &str) -> String {
		format!(
			"{}/{}/{}/{}/{}",
			base.trim_end_matches('/'),
			self.user,
			self.repo,
			self.branch,
			self.path
		)
	}

	/// Last path component, e.g. `"main.rs"`.
	pub fn file_name(&self) -> &str {
		self.path.rsplit('/').next().unwrap_or("unknown")
	}

	/// Extension of [`file_name`](Self::file_name), empty when there is none.
	pub fn file_extension(&self) -> &str {
		let name = self.file_name();
		match name.rsplit_once('.') {
			Some((_, ext)) => ext,
			None => "",
		}
	}

	pub fn file_info(&self) -> FileInfo {
		FileInfo {
			user: self.user.clone(),
			repo: self.repo.clone(),
			branch: self.branch.clone(),
			path: self.path.clone(),
			file_name: self.file_name().to_owned(),
			file_extension: self.file_extension().to_owned(),
			url: self.url.clone(),
		}
	}
}

/// File metadata returned alongside fetched content.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
	pub user: String,
	pub repo: String,
	pub branch: String,
	pub path: String,
	pub file_name: String,
	pub file_extension: String,
	pub url: String,
}

fn is_printable(c: char) -> bool {
	matches!(c, '\x20'..='\x7E' | '\n' | '\r' | '\t')
}

/// Checks fetched text and returns it trimmed.
///
/// # Errors
/// `InvalidArgument` if the text is blank, longer than [`MAX_CONTENT_CHARS`],
/// shorter than [`MIN_CONTENT_CHARS`], or less than 80% printable.
pub fn validate_content(content: &str) -> Result<String, ContentError> {
	if content.trim().is_empty() {
		return Err(ContentError::InvalidArgument("The file appears to be empty".to_owned()));
	}

	let total = content.chars().count();
	if total > MAX_CONTENT_CHARS {
		return Err(too_large());
	}
	if total < MIN_CONTENT_CHARS {
		return Err(ContentError::InvalidArgument(format!(
			"File is too short for meaningful typing practice (min {MIN_CONTENT_CHARS} characters)"
		)));
	}

	let printable = content.chars().filter(|c| is_printable(*c)).count();
	if (printable as f64) / (total as f64) < MIN_PRINTABLE_RATIO {
		return Err(ContentError::InvalidArgument(
			"File contains too many non-printable characters (binary file?)".to_owned(),
		));
	}

	Ok(content.trim().to_owned())
}
