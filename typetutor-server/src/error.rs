use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use typetutor_core::ContentError;

/// Message shown to clients when a server-side failure carries no better one.
const GENERIC_MESSAGE: &str = "Internal server error";

/// JSON error body: `{ "error": "..." }`.
#[derive(Serialize)]
pub struct ErrorBody<'a> {
	pub error: &'a str,
}

/// A [`ContentError`] on its way to becoming an HTTP response.
///
/// - `InvalidArgument` → 400, `NotFound` → 404, both with the error message
/// - `StoreUnavailable` / `DataCorrupt` → 500 with `message`; the diagnostic
///   is logged and never sent to the client
#[derive(Error, Debug)]
#[error("{message}: {source}")]
pub struct ApiError {
	source: ContentError,
	message: &'static str,
}

impl ApiError {
	pub fn new(source: ContentError, message: &'static str) -> Self {
		Self { source, message }
	}
}

impl From<ContentError> for ApiError {
	fn from(source: ContentError) -> Self {
		Self::new(source, GENERIC_MESSAGE)
	}
}

/// Attaches the client-facing message used if the error turns out to be server-side.
pub trait OrReport<T> {
	fn or_report(self, message: &'static str) -> Result<T, ApiError>;
}

impl<T> OrReport<T> for Result<T, ContentError> {
	fn or_report(self, message: &'static str) -> Result<T, ApiError> {
		self.map_err(|e| ApiError::new(e, message))
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self.source {
			ContentError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
			ContentError::NotFound(_) => StatusCode::NOT_FOUND,
			ContentError::StoreUnavailable(_) | ContentError::DataCorrupt(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let status = self.status_code();
		if self.source.is_client_error() {
			warn!(%status, "{}", self.source);
			let message = self.source.to_string();
			HttpResponse::build(status).json(ErrorBody { error: &message })
		} else {
			error!(%status, "{self}");
			HttpResponse::build(status).json(ErrorBody { error: self.message })
		}
	}
}
