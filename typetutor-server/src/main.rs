use std::io;

use tracing_subscriber::{EnvFilter, fmt};

use typetutor_server::config::Config;

/// Main entry point for the server.
///
/// Installs the tracing subscriber (`RUST_LOG`, default `info`), reads the
/// configuration from the environment and serves until Ctrl+C or SIGTERM.
#[actix_web::main]
async fn main() -> io::Result<()> {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
	fmt().with_env_filter(filter).init();

	let config = Config::load().map_err(io::Error::other)?;
	typetutor_server::run(config).await
}
