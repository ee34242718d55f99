// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing)
// 3. Load .env and read the configuration from the environment
// 4. Run the scrape: list -> enrich -> categorize -> write CSV
// 5. Exit with proper code (0 = success, 1 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod classify;      // src/classify.rs - category heuristics
mod cli;           // src/cli.rs - command-line parsing
mod config;        // src/config.rs - environment configuration
mod github;        // src/github/ - GitHub API access
mod report;        // src/report/ - CSV output
mod scrape;        // src/scrape.rs - the end-to-end run

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::Cli;
use config::Config;
use github::HttpGithubApi;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    // A missing .env file is fine, the variables may already be set
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    if config.token.is_none() {
        warn!(
            "GITHUB_TOKEN not found. You'll have lower rate limits and can't access private repos."
        );
        warn!("Consider adding your personal access token to the .env file.");
    }

    println!("Starting scrape for user: {}", config.username);

    let api = HttpGithubApi::new(&config)?;
    scrape::run(&api, &config, &cli.output).await?;

    Ok(())
}

// RUST_LOG wins when set; otherwise info (or debug with --verbose) for us
// and warn for the HTTP stack
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("github_repo_scraper={},reqwest=warn,hyper=warn", level))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}
