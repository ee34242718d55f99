// src/github/models.rs
// =============================================================================
// Data types for what we read from (and derive from) the GitHub API.
//
// RepositorySummary mirrors one element of GET /users/{user}/repos.
// Only the fields we export are declared; serde ignores the rest.
// Optional fields use #[serde(default)] so a sparse response still parses:
// missing strings become "", missing flags become false.
// =============================================================================

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub watchers_count: u64,
    /// Repository size in kilobytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub pushed_at: Option<String>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub has_issues: bool,
    #[serde(default)]
    pub has_wiki: bool,
    #[serde(default)]
    pub has_pages: bool,
    #[serde(default)]
    pub open_issues_count: u64,
    #[serde(default)]
    pub default_branch: String,
    #[serde(default)]
    pub topics: Vec<String>,
}

/// What the enricher adds on top of the listing data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichmentResult {
    /// Cleaned README text, at most 500 characters, or "No README found"
    pub readme_excerpt: String,
    /// Comma-joined language names, or "Not specified"
    pub languages_used: String,
}

/// Body of GET /repos/{owner}/{repo}/contents/{path}
#[derive(Debug, Deserialize)]
pub(crate) struct ContentFile {
    #[serde(default)]
    pub encoding: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}
