//! Crawler coordinator - owns everything a scrape needs
//!
//! The `Crawler` carries the configuration and the HTTP fetcher; the stages
//! of the pipeline are implemented on it in sibling modules:
//! - `walker`: category discovery and the catalog walk
//! - `paginator`: one category's listing pages
//! - `book`: one product page

use crate::config::Config;
use crate::crawler::fetcher::Fetcher;
use crate::output::RunSummary;
use crate::Result;
use std::path::Path;
use url::Url;

/// Main crawler structure
pub struct Crawler {
    pub(crate) config: Config,
    pub(crate) fetcher: Fetcher,
}

impl Crawler {
    /// Creates a crawler from a validated configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Crawler)` - Ready to scrape
    /// * `Err(ScrapeError)` - The HTTP client could not be built
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::new(&config.http)?;
        Ok(Self { config, fetcher })
    }

    /// Root directory for CSV files and covers
    pub fn output_root(&self) -> &Path {
        &self.config.output.directory
    }

    /// Parsed catalog root URL
    pub fn root_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.config.site.root_url)?)
    }
}

/// Runs a complete scrape of the configured catalog
///
/// # Example
///
/// ```no_run
/// use bookshelf_scraper::config::Config;
/// use bookshelf_scraper::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let summary = run_scrape(Config::default()).await?;
/// println!("{} books written", summary.books_written());
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<RunSummary> {
    let crawler = Crawler::new(config)?;
    let root = crawler.root_url()?;
    crawler.walk_catalog(&root).await
}
