// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Nothing here is required: running the binary with no arguments exports
// the repositories of GITHUB_USERNAME to my_github_repositories.csv.
// Who to scrape (and the token) always comes from the environment, see
// config.rs.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "github-repo-scraper",
    version = "0.1.0",
    about = "Export a GitHub user's repositories to CSV",
    long_about = "github-repo-scraper lists every repository of GITHUB_USERNAME, \
                  adds a README excerpt, the languages used and a rough category, \
                  and writes one CSV row per repository. \
                  Set GITHUB_TOKEN for higher rate limits."
)]
pub struct Cli {
    /// Where to write the CSV file
    #[arg(short, long, default_value = "my_github_repositories.csv")]
    pub output: PathBuf,

    /// Show debug logs (every API request)
    ///
    /// RUST_LOG overrides this when set
    #[arg(short, long)]
    pub verbose: bool,
}
