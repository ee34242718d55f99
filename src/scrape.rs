// src/scrape.rs
// =============================================================================
// The whole run, start to finish:
// 1. List every repository of the user
// 2. For each one (in listing order): fetch README + languages, categorize,
//    write a CSV row, then pause
// 3. Print a summary
//
// Everything is sequential: one request in flight at a time, with the fixed
// pauses from RateLimits in between.
// =============================================================================

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::classify::{categorize, category_label};
use crate::config::Config;
use crate::github::{list_repositories, Enricher, GithubApi, RepositorySummary};
use crate::report::{CsvReport, OutputRow};

// Runs the whole export
//
// Parameters:
//   api: where requests go (real HTTP client, or a scripted one in tests)
//   config: username and rate limits
//   output: path of the CSV file to create
//
// Returns: how many rows were written. With zero repositories no file is
//   created at all. Errors only come from creating or writing the file.
pub async fn run<A>(api: &A, config: &Config, output: &Path) -> Result<usize>
where
    A: GithubApi + ?Sized,
{
    println!("Fetching repositories for user: {}", config.username);
    let repos = list_repositories(api, &config.username, &config.rate_limits).await;

    if repos.is_empty() {
        println!("No repositories found or error occurred");
        return Ok(0);
    }

    println!("Found {} repositories. Processing...", repos.len());

    let mut report = CsvReport::create(output)?;
    let written = export_repositories(api, config, repos, &mut report).await?;
    report.finish()?;

    println!("\nScraping completed! Data saved to {}", output.display());
    println!("Total repositories processed: {}", written);

    Ok(written)
}

// Enriches each repository and appends its row to `report`
//
// Parameters:
//   repos: repositories in listing order; rows come out in the same order
//   report: an open CsvReport (file in production, Vec<u8> in tests)
//
// Returns: rows written so far. Enrichment never fails (it falls back to
//   sentinels), so the only errors here are write errors, and those stop
//   the run.
pub async fn export_repositories<A, W>(
    api: &A,
    config: &Config,
    repos: Vec<RepositorySummary>,
    report: &mut CsvReport<W>,
) -> Result<usize>
where
    A: GithubApi + ?Sized,
    W: Write,
{
    let enricher = Enricher::new(api, config);
    let total = repos.len();

    for (i, repo) in repos.into_iter().enumerate() {
        println!("Processing {}/{}: {}", i + 1, total, repo.name);

        let enrichment = enricher.enrich(&repo).await;
        let categories = categorize(
            &repo.name,
            repo.description.as_deref().unwrap_or(""),
            &enrichment.readme_excerpt,
            &enrichment.languages_used,
        );
        let category = category_label(&categories);
        debug!(repo = %repo.name, %category, "categorized");

        report.write_row(&OutputRow::new(repo, enrichment, category))?;

        // Be respectful to GitHub's API
        tokio::time::sleep(config.rate_limits.repo_delay).await;
    }

    Ok(report.rows_written())
}
