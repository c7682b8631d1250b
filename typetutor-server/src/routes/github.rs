use actix_web::http::StatusCode;
use actix_web::{HttpResponse, post, web};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use typetutor_core::ContentError;
use typetutor_core::github::{FileInfo, GitHubRawUrl, check_download_size, to_raw_url, validate_content};

use crate::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GitHubContent {
	success: bool,
	content: String,
	file_info: FileInfo,
	content_length: usize,
}

#[derive(Serialize)]
struct GitHubFailure {
	success: bool,
	error: String,
}

fn failure(error: &ContentError) -> HttpResponse {
	HttpResponse::build(StatusCode::BAD_REQUEST).json(GitHubFailure {
		success: false,
		error: error.to_string(),
	})
}

/// Extracts the `url` string field of the request body.
fn requested_url(body: &[u8]) -> Result<String, ContentError> {
	let missing = || ContentError::InvalidArgument("URL is required and must be a string".to_owned());
	let payload: Value = serde_json::from_slice(body).map_err(|_| missing())?;
	match payload.get("url") {
		Some(Value::String(url)) if !url.is_empty() => Ok(url.clone()),
		_ => Err(missing()),
	}
}

/// Downloads a validated file and checks the text is usable for practice.
///
/// The body is read chunk by chunk and abandoned as soon as it outgrows
/// [`MAX_DOWNLOAD_BYTES`](typetutor_core::github::MAX_DOWNLOAD_BYTES).
async fn fetch(client: &reqwest::Client, address: &str) -> Result<String, ContentError> {
	let network = |e: reqwest::Error| ContentError::InvalidArgument(format!("Network error: {e}"));

	let mut response = client.get(address).send().await.map_err(network)?;
	let status = response.status();
	if status == reqwest::StatusCode::NOT_FOUND {
		return Err(ContentError::InvalidArgument(
			"File not found on GitHub. Please check the URL and ensure the file exists.".to_owned(),
		));
	}
	if !status.is_success() {
		return Err(ContentError::InvalidArgument(format!("Failed to fetch content: {status}")));
	}
	if let Some(length) = response.content_length() {
		check_download_size(length)?;
	}

	let mut body = Vec::new();
	while let Some(chunk) = response.chunk().await.map_err(network)? {
		body.extend_from_slice(&chunk);
		check_download_size(body.len() as u64)?;
	}
	validate_content(&String::from_utf8_lossy(&body))
}

/// HTTP POST endpoint `/api/github-content`
///
/// Body: `{ "url": "<github blob or raw url>" }`. Regular `github.com/.../blob/...`
/// URLs are rewritten to their raw form. Only `raw.githubusercontent.com` URLs
/// are accepted; the file is downloaded from [`AppState::github_base`].
#[post("/api/github-content")]
pub async fn github_content(state: web::Data<AppState>, body: web::Bytes) -> HttpResponse {
	let url = match requested_url(&body) {
		Ok(url) => url,
		Err(e) => return failure(&e),
	};

	let raw = to_raw_url(&url).unwrap_or_else(|| url.trim().to_owned());
	let parsed = match GitHubRawUrl::parse(&raw) {
		Ok(parsed) => parsed,
		Err(e) => return failure(&e),
	};

	info!(url = %parsed.url, "fetching GitHub content");
	match fetch(&state.http, &parsed.fetch_url(&state.github_base)).await {
		Ok(content) => HttpResponse::Ok().json(GitHubContent {
			success: true,
			content_length: content.chars().count(),
			content,
			file_info: parsed.file_info(),
		}),
		Err(e) => {
			warn!(url = %parsed.url, "GitHub content rejected: {e}");
			failure(&e)
		}
	}
}
