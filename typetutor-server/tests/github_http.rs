use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, HttpServer, test, web};
use serde_json::{Value, json};

use typetutor_core::github::MAX_DOWNLOAD_BYTES;
use typetutor_server::routes;

mod helpers;

const HELLO: &str = "fn main() {\n    println!(\"Hello, typing practice!\");\n    let answer = 42;\n}\n";

/// Serves a handful of fixed files in place of raw.githubusercontent.com.
fn start_upstream() -> (String, ServerHandle) {
	let server = HttpServer::new(|| {
		App::new()
			.route("/u/r/main/src/hello.rs", web::get().to(|| async { HttpResponse::Ok().body(HELLO) }))
			.route("/u/r/main/tiny.txt", web::get().to(|| async { HttpResponse::Ok().body("fn main() {}") }))
			.route("/u/r/main/logo.png", web::get().to(|| async { HttpResponse::Ok().body(vec![0u8; 200]) }))
			.route(
				"/u/r/main/huge.txt",
				web::get().to(|| async { HttpResponse::Ok().body("a".repeat(MAX_DOWNLOAD_BYTES as usize + 1)) }),
			)
			.route("/u/r/main/private.rs", web::get().to(|| async { HttpResponse::Forbidden().finish() }))
	})
	.workers(1)
	.bind(("127.0.0.1", 0))
	.unwrap();

	let base = format!("http://{}", server.addrs()[0]);
	let server = server.run();
	let handle = server.handle();
	actix_web::rt::spawn(server);
	(base, handle)
}

async fn post_url(base: &str, url: &str) -> (StatusCode, Value) {
	let app = test::init_service(
		App::new()
			.app_data(helpers::state_with_github(base))
			.configure(routes::configure),
	)
	.await;

	let req = test::TestRequest::post()
		.uri("/api/github-content")
		.set_json(json!({ "url": url }))
		.to_request();
	let resp = test::call_service(&app, req).await;
	let status = resp.status();
	(status, test::read_body_json(resp).await)
}

#[actix_web::test]
async fn fetched_file_is_returned_with_its_metadata() {
	let (base, upstream) = start_upstream();

	let (status, body) = post_url(&base, "https://github.com/u/r/blob/main/src/hello.rs").await;
	assert_eq!(status, StatusCode::OK);
	assert_eq!(body["success"], true);
	assert_eq!(body["content"], HELLO.trim());
	assert_eq!(body["contentLength"], HELLO.trim().chars().count());
	assert_eq!(body["fileInfo"]["user"], "u");
	assert_eq!(body["fileInfo"]["repo"], "r");
	assert_eq!(body["fileInfo"]["branch"], "main");
	assert_eq!(body["fileInfo"]["path"], "src/hello.rs");
	assert_eq!(body["fileInfo"]["fileName"], "hello.rs");
	assert_eq!(body["fileInfo"]["fileExtension"], "rs");
	assert_eq!(body["fileInfo"]["url"], "https://raw.githubusercontent.com/u/r/main/src/hello.rs");

	upstream.stop(true).await;
}

#[actix_web::test]
async fn upstream_not_found_is_reported() {
	let (base, upstream) = start_upstream();

	let (status, body) = post_url(&base, "https://raw.githubusercontent.com/u/r/main/missing.rs").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert_eq!(body["success"], false);
	assert!(body["error"].as_str().unwrap().starts_with("File not found on GitHub"));

	upstream.stop(true).await;
}

#[actix_web::test]
async fn upstream_failure_status_is_reported() {
	let (base, upstream) = start_upstream();

	let (status, body) = post_url(&base, "https://raw.githubusercontent.com/u/r/main/private.rs").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert!(body["error"].as_str().unwrap().starts_with("Failed to fetch content"));
	assert!(body["error"].as_str().unwrap().contains("403"));

	upstream.stop(true).await;
}

#[actix_web::test]
async fn unusable_files_are_rejected() {
	let (base, upstream) = start_upstream();

	let cases = [
		("tiny.txt", "too short"),
		("logo.png", "non-printable"),
		("huge.txt", "too large"),
	];
	for (file, expected) in cases {
		let url = format!("https://raw.githubusercontent.com/u/r/main/{file}");
		let (status, body) = post_url(&base, &url).await;
		assert_eq!(status, StatusCode::BAD_REQUEST, "{file}");
		assert_eq!(body["success"], false, "{file}");
		assert!(body["error"].as_str().unwrap().contains(expected), "{file}: {body}");
	}

	upstream.stop(true).await;
}
