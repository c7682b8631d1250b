use std::sync::Arc;

use actix_web::web;
use tracing::info;

use typetutor_core::github::RAW_BASE;
use typetutor_core::{CatalogService, ContentError, ContentStore, FsStore, Sampler, TrigraphService};

use super::config::Config;

/// Shared, read-only application state.
pub struct AppState {
	pub trigraphs: TrigraphService,
	pub catalog: CatalogService,
	pub http: reqwest::Client,
	/// Host GitHub files are downloaded from, normally [`RAW_BASE`].
	pub github_base: String,
}

impl AppState {
	/// Builds the state served by the binary: a file-system store rooted at
	/// the configured content directory.
	pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
		let fs = FsStore::new(&config.content_dir);
		info!("Serving content from {}", fs.root().display());
		let store: Arc<dyn ContentStore> = Arc::new(fs);

		let http = reqwest::Client::builder()
			.timeout(config.github_timeout)
			.user_agent(concat!("typetutor/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self::with_parts(store, config.sampler_seed, http).with_github_base(&config.github_raw_base))
	}

	/// Builds a state over any store; used by tests with an in-memory store.
	pub fn with_store(store: Arc<dyn ContentStore>, seed: Option<u64>) -> Self {
		Self::with_parts(store, seed, reqwest::Client::new())
	}

	/// Downloads GitHub files from `base` instead of [`RAW_BASE`].
	pub fn with_github_base(mut self, base: &str) -> Self {
		self.github_base = base.to_owned();
		self
	}

	fn with_parts(store: Arc<dyn ContentStore>, seed: Option<u64>, http: reqwest::Client) -> Self {
		let sampler = |offset: u64| match seed {
			Some(seed) => Sampler::seeded(seed.wrapping_add(offset)),
			None => Sampler::new(),
		};

		Self {
			trigraphs: TrigraphService::new(Arc::clone(&store), sampler(0)),
			catalog: CatalogService::new(store, sampler(1)),
			http,
			github_base: RAW_BASE.to_owned(),
		}
	}
}

/// Runs a blocking service call on the blocking thread pool.
pub async fn offload<T, F>(state: web::Data<AppState>, task: F) -> Result<T, ContentError>
where
	F: FnOnce(&AppState) -> Result<T, ContentError> + Send + 'static,
	T: Send + 'static,
{
	web::block(move || task(&state))
		.await
		.map_err(|e| ContentError::StoreUnavailable(format!("blocking task failed: {e}")))?
}
