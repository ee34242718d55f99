// src/config.rs
// =============================================================================
// This module loads the scraper's configuration from environment variables.
//
// Variables:
// - GITHUB_USERNAME             (required) whose repositories to export
// - GITHUB_TOKEN                (optional) personal access token
// - GITHUB_API_URL              (optional) defaults to https://api.github.com
// - GITHUB_REQUEST_TIMEOUT_SECS (optional) defaults to 30
//
// main.rs loads a .env file first (via dotenvy), so these can live there too.
//
// The Config struct is built once and handed to the lister and enricher,
// instead of each of them reading the environment on its own.
// =============================================================================

use std::time::Duration;
use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Problems found while reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "GITHUB_USERNAME not found in environment variables.\n\
         Please create a .env file with your GitHub username."
    )]
    MissingUsername,

    #[error("Invalid GITHUB_API_URL '{value}': {reason}")]
    InvalidApiUrl { value: String, reason: String },

    #[error("Invalid GITHUB_REQUEST_TIMEOUT_SECS '{0}': expected a whole number of seconds")]
    InvalidTimeout(String),
}

/// Fixed pauses between API calls.
///
/// GitHub has rate limits, so we sleep a little between requests.
/// This is best-effort only: we never look at the rate limit headers
/// and we never retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateLimits {
    /// Pause between listing pages
    pub page_delay: Duration,
    /// Pause between README candidate files
    pub readme_delay: Duration,
    /// Pause after each repository row is written
    pub repo_delay: Duration,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_millis(100),
            readme_delay: Duration::from_millis(100),
            repo_delay: Duration::from_millis(200),
        }
    }
}

#[cfg(test)]
impl RateLimits {
    /// No pauses at all
    pub fn none() -> Self {
        Self {
            page_delay: Duration::ZERO,
            readme_delay: Duration::ZERO,
            repo_delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub token: Option<String>,
    /// API root without a trailing slash
    pub api_base: String,
    pub request_timeout: Duration,
    pub rate_limits: RateLimits,
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through any key lookup function
    ///
    /// Empty (or whitespace-only) values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let username = get("GITHUB_USERNAME").ok_or(ConfigError::MissingUsername)?;
        let token = get("GITHUB_TOKEN");

        let api_base = match get("GITHUB_API_URL") {
            Some(raw) => parse_api_base(&raw)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let request_timeout = match get("GITHUB_REQUEST_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidTimeout(raw))?,
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        Ok(Self {
            username,
            token,
            api_base,
            request_timeout,
            rate_limits: RateLimits::default(),
        })
    }
}

// Only http(s) URLs make sense here; anything else would fail on first request
fn parse_api_base(raw: &str) -> Result<String, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidApiUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidApiUrl {
            value: raw.to_string(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}
