use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, get, web};

use typetutor_core::ContentError;

use crate::error::{ApiError, OrReport};
use crate::state::{AppState, offload};

const ONE_HOUR: u32 = 60 * 60;
const FIVE_MINUTES: u32 = 5 * 60;

fn cacheable(seconds: u32) -> CacheControl {
	CacheControl(vec![CacheDirective::Public, CacheDirective::MaxAge(seconds)])
}

/// HTTP GET endpoint `/api/code-collections/languages`
#[get("/api/code-collections/languages")]
pub async fn list_languages(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	let catalog = offload(state, |s| s.catalog.list_languages())
		.await
		.or_report("Failed to load programming languages")?;

	Ok(HttpResponse::Ok().insert_header(cacheable(ONE_HOUR)).json(catalog))
}

/// HTTP GET endpoint `/api/code-collections/collections/{lang}`
///
/// Summaries of every collection of a language, easiest first.
#[get("/api/code-collections/collections/{lang}")]
pub async fn list_collections(
	state: web::Data<AppState>,
	lang: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
	let lang = lang.into_inner();
	let collections = offload(state, move |s| s.catalog.list_collections(&lang))
		.await
		.or_report("Failed to fetch collections")?;

	Ok(HttpResponse::Ok().insert_header(cacheable(ONE_HOUR)).json(collections))
}

#[get("/api/code-collections/snippets/{lang}/")]
pub async fn missing_snippet_params() -> Result<HttpResponse, ApiError> {
	Err(ContentError::InvalidArgument("Missing required parameters".to_owned()).into())
}

/// HTTP GET endpoint `/api/code-collections/snippets/{lang}/{id}`
///
/// Snippets of one collection, each annotated with its stored position.
#[get("/api/code-collections/snippets/{lang}/{id}")]
pub async fn get_snippets(
	state: web::Data<AppState>,
	path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
	let (lang, id) = path.into_inner();
	let snippets = offload(state, move |s| s.catalog.get_snippets(&lang, &id)).await.map_err(|e| match e {
		ContentError::DataCorrupt(_) => ApiError::new(e, "Invalid collection format"),
		other => ApiError::new(other, "Failed to fetch collection snippets"),
	})?;

	Ok(HttpResponse::Ok().insert_header(cacheable(FIVE_MINUTES)).json(snippets))
}

/// HTTP GET endpoint `/api/code-collections/random-snippet/{lang}`
///
/// One snippet drawn from every collection of the language. Never cached.
#[get("/api/code-collections/random-snippet/{lang}")]
pub async fn random_snippet(
	state: web::Data<AppState>,
	lang: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
	let lang = lang.into_inner();
	let snippet = offload(state, move |s| s.catalog.random_snippet(&lang))
		.await
		.or_report("Failed to fetch random snippet")?;

	Ok(HttpResponse::Ok()
		.insert_header(CacheControl(vec![CacheDirective::NoCache]))
		.json(snippet))
}
