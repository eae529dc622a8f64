use serde::Deserialize;
use std::path::PathBuf;

/// Default catalog root
pub const DEFAULT_ROOT_URL: &str = "https://books.toscrape.com/";

/// Default output root directory
pub const DEFAULT_OUTPUT_DIR: &str = "scrapped";

/// Main configuration structure for Bookshelf-Scraper
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Replaces the output directory and root URL when given
    pub fn with_overrides(mut self, output_dir: Option<PathBuf>, root_url: Option<String>) -> Self {
        if let Some(output_dir) = output_dir {
            self.output.directory = output_dir;
        }
        if let Some(root_url) = root_url {
            self.site.root_url = root_url;
        }
        self
    }
}

/// Which site to scrape
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Page carrying the category navigation sidebar
    #[serde(rename = "root-url")]
    pub root_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout (seconds)
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// Connection timeout (seconds)
    #[serde(rename = "connect-timeout-secs")]
    pub connect_timeout_secs: u64,

    /// Pause before every request (milliseconds)
    #[serde(rename = "request-delay-ms")]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("bookshelf-scraper/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
            connect_timeout_secs: 10,
            request_delay_ms: 0,
        }
    }
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Maximum number of listing pages followed in one category
    #[serde(rename = "max-pages-per-category")]
    pub max_pages_per_category: u32,

    /// Maximum number of book pages fetched concurrently within a listing page
    #[serde(rename = "max-concurrent-books")]
    pub max_concurrent_books: usize,

    /// Where the `category` column of each record comes from
    #[serde(rename = "category-label")]
    pub category_label: CategoryLabel,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            max_pages_per_category: 1000,
            max_concurrent_books: 1,
            category_label: CategoryLabel::Breadcrumb,
        }
    }
}

/// Source of truth for a record's category label
///
/// A book listed under several categories reports only one of them in its
/// breadcrumb, so the two sources can disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryLabel {
    /// Third breadcrumb entry of the product page
    #[default]
    Breadcrumb,
    /// Navigation category currently being walked
    Listing,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory for CSV files and cover images
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}
