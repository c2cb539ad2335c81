//! Configuration for the sessions API client.
//!
//! Everything the client needs comes from two required environment
//! variables; the resulting `Config` is built once at startup and passed
//! down explicitly. There is no ambient/global configuration state.

use anyhow::{bail, Context, Result};
use reqwest::header::{HeaderMap, HeaderValue};
use std::env;
use tracing::info;

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "SESSIONS_API_URL";
/// Environment variable holding the static API key.
pub const API_KEY_VAR: &str = "SESSIONS_API_KEY";

/// Header the API expects the key in, on every request.
const API_KEY_HEADER: &str = "X-API-Key";

/// Transcript content language selected when no --language flag is given.
pub const DEFAULT_LANGUAGE: &str = "nl";

#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL, without a trailing slash.
    pub api_url: String,
    /// Language code used to pick transcript content entries.
    pub language: String,
    /// HTTP client that sends the API key header on every request.
    pub client: reqwest::Client,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// Fails before any network I/O if either variable is missing or empty.
    pub fn from_env() -> Result<Self> {
        let api_url = require_env(API_URL_VAR)?;
        let api_key = require_env(API_KEY_VAR)?;

        let config = Self::new(&api_url, &api_key)?;
        info!("Loaded config, API base URL: {}", config.api_url);
        Ok(config)
    }

    /// Build a configuration from explicit values.
    pub fn new(api_url: &str, api_key: &str) -> Result<Self> {
        let mut key =
            HeaderValue::from_str(api_key).context("API key is not a valid HTTP header value")?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            client,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    let value = env::var(name)
        .with_context(|| format!("Required environment variable {} is not set", name))?;
    if value.trim().is_empty() {
        bail!("Required environment variable {} is empty", name);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_trailing_slash() {
        let config = Config::new("https://api.example.com/", "secret").unwrap();
        assert_eq!(config.api_url, "https://api.example.com");
    }

    #[test]
    fn test_new_defaults_language_to_nl() {
        let config = Config::new("https://api.example.com", "secret").unwrap();
        assert_eq!(config.language, DEFAULT_LANGUAGE);
    }

    #[test]
    fn test_new_rejects_invalid_header_value() {
        let result = Config::new("https://api.example.com", "bad\nkey");
        assert!(result.is_err());
    }
}
