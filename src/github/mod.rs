// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Submodules:
// - client: the GithubApi trait and its reqwest implementation
// - models: the repository data we read and derive
// - list: pages through a user's repositories
// - enrich: README excerpt and language breakdown per repository
// - mock: a scripted GithubApi for tests (test builds only)
// =============================================================================

mod client;
mod enrich;
mod list;
mod models;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{GithubApi, HttpGithubApi};
pub use enrich::Enricher;
pub use list::list_repositories;
pub use models::{EnrichmentResult, RepositorySummary};
