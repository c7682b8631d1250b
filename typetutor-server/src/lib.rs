//! HTTP surface of the typing tutor.
//!
//! Serves the static practice content as JSON:
//! - trigraph word lists and random word samples
//! - the language catalog, snippet collections and snippets
//! - a proxy for GitHub raw files
//!
//! Every route is a read; there is no cross-request mutable state apart from
//! the random generators of the samplers.

use std::io;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use tracing::info;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use config::Config;
use state::AppState;

/// CORS policy: any origin, read and proxy methods, one hour preflight cache.
pub fn cors() -> Cors {
	Cors::default()
		.allow_any_origin()
		.allowed_methods(vec!["GET", "POST", "OPTIONS"])
		.allowed_header(header::CONTENT_TYPE)
		.max_age(60 * 60)
}

/// Starts the HTTP server and runs until it receives a shutdown signal.
pub async fn run(config: Config) -> io::Result<()> {
	info!("Initializing state...");
	let state = web::Data::new(AppState::new(&config).map_err(io::Error::other)?);

	let address = (config.host.clone(), config.port);
	info!("Binding to {}:{}", config.host, config.port);

	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(cors())
			.app_data(state.clone())
			.configure(routes::configure)
	})
	.bind(address)?
	.run()
	.await?;

	info!("Server shutting down...");
	Ok(())
}
