// src/github/client.rs
// =============================================================================
// The seam between our code and the GitHub REST API.
//
// GithubApi is a tiny trait: "GET this path with these query parameters".
// - HttpGithubApi is the real implementation, built on reqwest
// - Tests use a scripted implementation (see mock.rs) so they never touch
//   the network
//
// Any HTTP status comes back as Ok(ApiResponse). Only transport failures
// (DNS, TLS, timeout, connection reset) are errors. Callers decide what a
// 404 or 403 means for them.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::config::Config;

/// A raw API response: status plus the body text
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

#[async_trait]
pub trait GithubApi: Send + Sync {
    /// GET `path` (relative to the API root, starting with '/')
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse>;
}

/// GithubApi over HTTPS
pub struct HttpGithubApi {
    client: Client,
    base_url: String,
}

impl HttpGithubApi {
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github.v3+json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("GitHub-Repo-Scraper"));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("token {}", token))
                .context("GITHUB_TOKEN contains characters not allowed in an HTTP header")?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        // We'll reuse this client for all requests (connection pooling)
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base.clone(),
        })
    }
}

#[async_trait]
impl GithubApi for HttpGithubApi {
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<ApiResponse> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, ?query, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?;

        debug!(%url, status = status.as_u16(), bytes = body.len(), "response");
        Ok(ApiResponse { status, body })
    }
}
