// src/github/enrich.rs
// =============================================================================
// Adds README text and the language breakdown to a listed repository.
//
// README:
// - Try README.md, README.rst, README.txt, README (in that order) through
//   the contents API, which returns the file base64 encoded
// - The first one that decodes wins; its text is cleaned up and cut to
//   500 characters so it fits in a spreadsheet cell
// - If none work we use the sentinel "No README found"
//
// Languages:
// - GET /repos/{owner}/{repo}/languages returns {"Rust": 12345, ...}
// - We keep the names in the order GitHub sends them (largest first)
// - Empty or failed -> "Not specified"
//
// Nothing in here returns an error. A failure just means the sentinel.
// =============================================================================

use std::sync::OnceLock;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::client::GithubApi;
use super::models::{ContentFile, EnrichmentResult, RepositorySummary};
use crate::config::{Config, RateLimits};

pub const NO_README: &str = "No README found";
pub const NO_LANGUAGES: &str = "Not specified";
pub const README_CANDIDATES: [&str; 4] = ["README.md", "README.rst", "README.txt", "README"];
pub const README_EXCERPT_CHARS: usize = 500;

pub struct Enricher<'a, A: GithubApi + ?Sized> {
    api: &'a A,
    owner: &'a str,
    limits: &'a RateLimits,
}

impl<'a, A: GithubApi + ?Sized> Enricher<'a, A> {
    pub fn new(api: &'a A, config: &'a Config) -> Self {
        Self {
            api,
            owner: &config.username,
            limits: &config.rate_limits,
        }
    }

    // Fetches README and languages for one repository
    //
    // Returns: EnrichmentResult, always filled in (sentinels on failure)
    pub async fn enrich(&self, repo: &RepositorySummary) -> EnrichmentResult {
        let readme_excerpt = self.fetch_readme(&repo.name).await;
        let languages_used = self.fetch_languages(&repo.name).await;
        EnrichmentResult {
            readme_excerpt,
            languages_used,
        }
    }

    // Fetches the README of a repository
    //
    // Parameters:
    //   repo_name: repository name under the configured owner
    //
    // Returns: the cleaned excerpt (<= 500 chars), or "No README found"
    //   when none of the candidate files could be fetched and decoded
    pub async fn fetch_readme(&self, repo_name: &str) -> String {
        for (attempt, file) in README_CANDIDATES.iter().enumerate() {
            // Rate limiting between candidates
            if attempt > 0 {
                tokio::time::sleep(self.limits.readme_delay).await;
            }

            let path = format!("/repos/{}/{}/contents/{}", self.owner, repo_name, file);
            let response = match self.api.get(&path, &[]).await {
                Ok(response) => response,
                Err(e) => {
                    debug!(repo = repo_name, file, "README request failed: {:#}", e);
                    continue;
                }
            };

            if !response.is_success() {
                debug!(repo = repo_name, file, status = response.status.as_u16(), "no README here");
                continue;
            }

            // A file we can't decode counts as missing: try the next name
            match decode_readme(&response.body) {
                Some(text) => return clean_readme(&text),
                None => debug!(repo = repo_name, file, "README could not be decoded"),
            }
        }

        NO_README.to_string()
    }

    // Fetches the language breakdown of a repository
    //
    // Parameters:
    //   repo_name: repository name under the configured owner
    //
    // Returns: "Lang1, Lang2, ..." in the API's order, or "Not specified"
    //   when the mapping is empty or the request fails
    pub async fn fetch_languages(&self, repo_name: &str) -> String {
        let path = format!("/repos/{}/{}/languages", self.owner, repo_name);

        let response = match self.api.get(&path, &[]).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                warn!(
                    repo = repo_name,
                    status = response.status.as_u16(),
                    "could not fetch languages"
                );
                return NO_LANGUAGES.to_string();
            }
            Err(e) => {
                warn!(repo = repo_name, "could not fetch languages: {:#}", e);
                return NO_LANGUAGES.to_string();
            }
        };

        match serde_json::from_str::<Map<String, Value>>(&response.body) {
            Ok(languages) if !languages.is_empty() => {
                languages.keys().map(String::as_str).collect::<Vec<_>>().join(", ")
            }
            Ok(_) => NO_LANGUAGES.to_string(),
            Err(e) => {
                warn!(repo = repo_name, "unexpected languages response: {}", e);
                NO_LANGUAGES.to_string()
            }
        }
    }
}

// Pulls the text out of a contents API response.
// GitHub wraps the base64 at 60 columns, so whitespace is dropped first.
fn decode_readme(body: &str) -> Option<String> {
    let file: ContentFile = serde_json::from_str(body).ok()?;
    if file.encoding.as_deref() != Some("base64") {
        return None;
    }

    let packed: String = file
        .content?
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(packed).ok()?;
    String::from_utf8(bytes).ok()
}

fn newline_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\r?\n)+").expect("valid regex"))
}

fn markdown_markers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[#*`]").expect("valid regex"))
}

/// Flattens README text into a single line excerpt
///
/// Newline runs become one space, `#`, `*` and backticks are removed,
/// the result is trimmed and cut to README_EXCERPT_CHARS characters.
pub fn clean_readme(text: &str) -> String {
    let flat = newline_runs().replace_all(text, " ");
    let stripped = markdown_markers().replace_all(&flat, "");
    stripped.trim().chars().take(README_EXCERPT_CHARS).collect()
}
