// src/github/list.rs
// =============================================================================
// Lists every repository of a user, most recently updated first.
//
// Strategy:
// - GET /users/{user}/repos with page=1,2,3... and per_page=100
// - Stop on the first empty page, or on a page shorter than per_page
//   (there can't be anything after it)
// - Stop on any failure (bad status, transport error, unparseable body),
//   log it, and keep whatever pages we already have
// - Sleep a little between pages to be nice to GitHub's API
// =============================================================================

use tracing::{debug, error};

use super::client::GithubApi;
use super::models::RepositorySummary;
use crate::config::RateLimits;

pub const PAGE_SIZE: usize = 100;

// Fetches all repositories of a user, page by page
//
// Parameters:
//   api: where requests go (real HTTP client, or a scripted one in tests)
//   username: GitHub login whose repositories we list
//   limits: how long to pause between pages
//
// Returns: Vec<RepositorySummary> in GitHub's order (most recently updated
//   first). Never an error: on failure we log and return what we have.
pub async fn list_repositories<A>(
    api: &A,
    username: &str,
    limits: &RateLimits,
) -> Vec<RepositorySummary>
where
    A: GithubApi + ?Sized,
{
    let path = format!("/users/{}/repos", username);
    let mut repos = Vec::new();
    let mut page = 1u32;

    loop {
        let query = [
            ("page", page.to_string()),
            ("per_page", PAGE_SIZE.to_string()),
            ("sort", "updated".to_string()),
            ("direction", "desc".to_string()),
        ];

        let response = match api.get(&path, &query).await {
            Ok(response) => response,
            Err(e) => {
                error!(page, "Error fetching repositories: {:#}", e);
                break;
            }
        };

        // Any non-2xx ends the listing (no retries)
        if !response.is_success() {
            error!(
                page,
                status = response.status.as_u16(),
                body = %response.body,
                "Error fetching repositories: {}",
                response.status
            );
            break;
        }

        let page_repos: Vec<RepositorySummary> = match serde_json::from_str(&response.body) {
            Ok(repos) => repos,
            Err(e) => {
                error!(page, "Error parsing repository list: {}", e);
                break;
            }
        };

        if page_repos.is_empty() {
            break;
        }

        // A short page means there is nothing after it
        let last_page = page_repos.len() < PAGE_SIZE;
        debug!(page, count = page_repos.len(), "fetched repository page");
        repos.extend(page_repos);

        if last_page {
            break;
        }
        page += 1;

        // Rate limiting - be nice to GitHub's API
        tokio::time::sleep(limits.page_delay).await;
    }

    repos
}
