use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use typetutor_core::ContentError;
use typetutor_core::service::trigraph::parse_count;

use crate::error::{ApiError, OrReport};
use crate::state::{AppState, offload};

/// Query parameters of `/api/trigraphs/{name}`.
///
/// `count` is kept raw so malformed values get our own 400 message.
#[derive(Deserialize)]
pub struct SampleParams {
	count: Option<String>,
}

/// HTTP GET endpoint `/api/trigraphs`
///
/// Lists the names of every trigraph word list.
#[get("/api/trigraphs")]
pub async fn list_trigraphs(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	let names = offload(state, |s| s.trigraphs.list_corpora())
		.await
		.or_report("Failed to read trigraphs directory.")?;

	Ok(HttpResponse::Ok()
		.insert_header(CacheControl(vec![CacheDirective::Public, CacheDirective::MaxAge(300)]))
		.json(names))
}

#[get("/api/trigraphs/")]
pub async fn missing_trigraph_name() -> Result<HttpResponse, ApiError> {
	Err(ContentError::InvalidArgument("Trigraph name not provided.".to_owned()).into())
}

/// HTTP GET endpoint `/api/trigraphs/{name}`
///
/// Returns `count` (default 20) random words of the named word list.
#[get("/api/trigraphs/{name}")]
pub async fn sample_trigraph(
	state: web::Data<AppState>,
	name: web::Path<String>,
	params: web::Query<SampleParams>,
) -> Result<HttpResponse, ApiError> {
	let name = name.into_inner();
	let count = parse_count(params.count.as_deref())?;

	let words = offload(state, move |s| s.trigraphs.get_sample(&name, count))
		.await
		.or_report("Failed to sample trigraph words")?;

	Ok(HttpResponse::Ok().json(words))
}
