use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use tracing::{info, warn};

use typetutor_core::github::RAW_BASE;

#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("invalid value for {key}: {message}")]
	Invalid { key: &'static str, message: String },
}

/// Server configuration, read from the environment at startup.
///
/// | Variable | Default |
/// |---|---|
/// | `TYPETUTOR_HOST` | `127.0.0.1` |
/// | `TYPETUTOR_PORT` | `5000` |
/// | `TYPETUTOR_CONTENT_DIR` | `./static/content` |
/// | `TYPETUTOR_SAMPLER_SEED` | unset (seeded from the OS) |
/// | `TYPETUTOR_GITHUB_TIMEOUT_SECS` | `10` |
/// | `TYPETUTOR_GITHUB_RAW_BASE` | `https://raw.githubusercontent.com` |
#[derive(Debug, Clone)]
pub struct Config {
	pub host: String,
	pub port: u16,
	pub content_dir: PathBuf,
	pub sampler_seed: Option<u64>,
	pub github_timeout: Duration,
	/// Host the GitHub proxy downloads from. Client URLs are always validated
	/// against `raw.githubusercontent.com`; only the download goes here.
	pub github_raw_base: String,
}

impl Config {
	/// Loads the configuration from process environment variables.
	pub fn load() -> Result<Self, ConfigError> {
		Self::from_lookup(|key| env::var(key).ok())
	}

	/// Loads the configuration from an arbitrary key lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		Ok(Self {
			host: try_load(&lookup, "TYPETUTOR_HOST", "127.0.0.1")?,
			port: try_load(&lookup, "TYPETUTOR_PORT", "5000")?,
			content_dir: try_load(&lookup, "TYPETUTOR_CONTENT_DIR", "./static/content")?,
			sampler_seed: try_load_optional(&lookup, "TYPETUTOR_SAMPLER_SEED")?,
			github_timeout: Duration::from_secs(try_load(&lookup, "TYPETUTOR_GITHUB_TIMEOUT_SECS", "10")?),
			github_raw_base: try_load(&lookup, "TYPETUTOR_GITHUB_RAW_BASE", RAW_BASE)?,
		})
	}
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
	T: FromStr,
	T::Err: Display,
	F: Fn(&str) -> Option<String>,
{
	lookup(key)
		.unwrap_or_else(|| {
			info!("{key} not set, using default: {default}");
			default.to_owned()
		})
		.parse()
		.map_err(|e: T::Err| {
			warn!("Invalid {key} value: {e}");
			ConfigError::Invalid { key, message: e.to_string() }
		})
}

fn try_load_optional<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
	T: FromStr,
	T::Err: Display,
	F: Fn(&str) -> Option<String>,
{
	match lookup(key) {
		None => Ok(None),
		Some(raw) => raw.parse().map(Some).map_err(|e: T::Err| {
			warn!("Invalid {key} value: {e}");
			ConfigError::Invalid { key, message: e.to_string() }
		}),
	}
}
