use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, Responder, get};

pub const GREETING: &str = "Let's learn Touch Typing";

/// HTTP GET endpoint `/random`
#[get("/random")]
pub async fn greeting() -> impl Responder {
	HttpResponse::Ok().content_type(ContentType::plaintext()).body(GREETING)
}
