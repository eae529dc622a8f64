//! Bookshelf-Scraper: a catalog scraper for a single book store site
//!
//! This crate walks the category navigation of a book catalog, follows each
//! category's paginated listing, extracts per-product fields from every
//! product page and writes one CSV per category plus downloaded cover images.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod model;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Bookshelf-Scraper operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP error for {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("HTML parse error for {url}: {message}")]
    Parse { url: String, message: String },

    #[error("Missing field '{field}' on {url}")]
    MissingField { url: String, field: &'static str },

    #[error("Unrecognized rating word: '{0}'")]
    UnrecognizedRating(String),

    #[error("No number found in '{0}'")]
    ParseNumber(String),

    #[error("Pagination limit of {limit} pages reached at {url}")]
    PaginationLimit { url: String, limit: u32 },

    #[error("Pagination cycle detected at {url}")]
    PaginationCycle { url: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScrapeError {
    pub(crate) fn parse(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            url: url.into(),
            message: message.into(),
        }
    }

    pub(crate) fn missing(url: impl Into<String>, field: &'static str) -> Self {
        Self::MissingField {
            url: url.into(),
            field,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for Bookshelf-Scraper operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_scrape, Crawler};
pub use model::{BookRecord, Category};
pub use output::RunSummary;
