// src/report/row.rs
// =============================================================================
// OutputRow is everything we know about one repository, flattened.
//
// Field order is column order: csv serializes struct fields in the order
// they are declared, and the header in writer.rs lists the same names.
// Null fields from the API become empty strings here.
// =============================================================================

use serde::Serialize;

use crate::github::{EnrichmentResult, RepositorySummary};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow {
    pub name: String,
    pub description: String,
    pub readme_content: String,
    pub url: String,
    pub clone_url: String,
    pub ssh_url: String,
    pub homepage: String,
    pub language: String,
    pub languages_used: String,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub size_kb: u64,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
    pub is_private: bool,
    pub is_fork: bool,
    pub is_archived: bool,
    pub has_issues: bool,
    pub has_wiki: bool,
    pub has_pages: bool,
    pub open_issues_count: u64,
    pub default_branch: String,
    pub category: String,
    pub topics: String,
}

impl OutputRow {
    pub fn new(repo: RepositorySummary, enrichment: EnrichmentResult, category: String) -> Self {
        Self {
            name: repo.name,
            description: repo.description.unwrap_or_default(),
            readme_content: enrichment.readme_excerpt,
            url: repo.html_url,
            clone_url: repo.clone_url,
            ssh_url: repo.ssh_url,
            homepage: repo.homepage.unwrap_or_default(),
            language: repo.language.unwrap_or_default(),
            languages_used: enrichment.languages_used,
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            watchers: repo.watchers_count,
            size_kb: repo.size,
            created_at: repo.created_at,
            updated_at: repo.updated_at,
            pushed_at: repo.pushed_at.unwrap_or_default(),
            is_private: repo.private,
            is_fork: repo.fork,
            is_archived: repo.archived,
            has_issues: repo.has_issues,
            has_wiki: repo.has_wiki,
            has_pages: repo.has_pages,
            open_issues_count: repo.open_issues_count,
            default_branch: repo.default_branch,
            category,
            topics: repo.topics.join(", "),
        }
    }
}
