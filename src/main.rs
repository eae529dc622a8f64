//! Bookshelf-Scraper main entry point
//!
//! This is the command-line interface for the Bookshelf-Scraper catalog scraper.

use anyhow::Context;
use bookshelf_scraper::config::{read_config, validate, Config};
use bookshelf_scraper::crawler::Crawler;
use bookshelf_scraper::output::print_summary;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Bookshelf-Scraper: a book catalog scraper
///
/// Walks every category of the catalog, writes one CSV per category and
/// saves each book's cover image under a per-category directory.
#[derive(Parser, Debug)]
#[command(name = "bookshelf-scraper")]
#[command(version)]
#[command(about = "Scrapes a book catalog into per-category CSV files", long_about = None)]
struct Cli {
    /// Output root directory (default: "scrapped")
    #[arg(value_name = "OUTPUT_DIR")]
    output_dir: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog root URL, overriding the configuration
    #[arg(long, value_name = "URL")]
    root_url: Option<String>,

    /// List the categories that would be scraped, then exit
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(config).await?;
        return Ok(ExitCode::SUCCESS);
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("bookshelf_scraper=info,warn"),
            1 => EnvFilter::new("bookshelf_scraper=debug,info"),
            2 => EnvFilter::new("bookshelf_scraper=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration and applies command-line overrides
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
    }

    let config = read_config(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.output_dir.clone(), cli.root_url.clone());

    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the categories that would be scraped
async fn handle_dry_run(config: Config) -> anyhow::Result<()> {
    println!("=== Bookshelf-Scraper Dry Run ===\n");

    println!("Catalog root: {}", config.site.root_url);
    println!("Output root: {}", config.output.directory.display());
    println!(
        "Max concurrent books: {}",
        config.crawler.max_concurrent_books
    );
    println!(
        "Max pages per category: {}",
        config.crawler.max_pages_per_category
    );

    let crawler = Crawler::new(config)?;
    let root = crawler.root_url()?;
    let nav = crawler
        .discover_categories(&root)
        .await
        .context("Failed to discover categories")?;
    let categories = &nav.categories;

    println!("\nCategories ({}):", categories.len());
    for category in categories {
        println!(
            "  - {} -> {}",
            category.name,
            crawler.output_root().join(category.csv_file_name()).display()
        );
        println!("    * {}", category.url);
    }

    if nav.dropped > 0 {
        println!("\n! {} unusable sidebar entries would be skipped", nav.dropped);
    }

    println!("\n✓ Would scrape {} categories", categories.len());

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<ExitCode> {
    tracing::info!(
        "Scraping {} into {}",
        config.site.root_url,
        config.output.directory.display()
    );

    let crawler = Crawler::new(config)?;
    let root = crawler.root_url()?;

    let summary = match crawler.walk_catalog(&root).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            return Err(e.into());
        }
    };

    print_summary(&summary);

    if summary.has_failures() {
        tracing::warn!("Scrape completed with failures");
        Ok(ExitCode::FAILURE)
    } else {
        tracing::info!("Scrape completed successfully");
        Ok(ExitCode::SUCCESS)
    }
}
