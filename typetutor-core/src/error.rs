use thiserror::Error;

/// Failure raised by a [`ContentStore`](crate::store::ContentStore).
///
/// Stores only distinguish "this resource does not exist" from "the store
/// could not be read". Services decide what either means for their callers.
#[derive(Error, Debug)]
pub enum StoreError {
	#[error("resource not found: {0}")]
	NotFound(String),

	#[error("failed to read {path}: {source}")]
	Unavailable {
		path: String,
		#[source]
		source: std::io::Error,
	},
}

/// Error taxonomy shared by every service.
///
/// # Variants
/// - `InvalidArgument`: malformed or missing request parameter (user error).
/// - `NotFound`: the requested named resource does not exist (user error).
/// - `StoreUnavailable`: the content store could not be read (server error).
/// - `DataCorrupt`: stored content does not have the expected shape (server error).
///
/// The message of the two user-error variants is safe to return to a client.
/// The server-side variants carry diagnostics meant for logs only.
#[derive(Error, Debug)]
pub enum ContentError {
	#[error("{0}")]
	InvalidArgument(String),

	#[error("{0}")]
	NotFound(String),

	#[error("content store unavailable: {0}")]
	StoreUnavailable(String),

	#[error("corrupt content: {0}")]
	DataCorrupt(String),
}

impl ContentError {
	/// Returns `true` for failures caused by the request rather than the server.
	pub fn is_client_error(&self) -> bool {
		matches!(self, ContentError::InvalidArgument(_) | ContentError::NotFound(_))
	}
}
