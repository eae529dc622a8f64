//! Configuration module for Bookshelf-Scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a default, so running without a file is the common case.
//!
//! # Example
//!
//! ```no_run
//! use bookshelf_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Writing output under {}", config.output.directory.display());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    CategoryLabel, Config, CrawlerConfig, HttpConfig, OutputConfig, SiteConfig, DEFAULT_OUTPUT_DIR,
    DEFAULT_ROOT_URL,
};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default, parse_config, read_config};
pub use validation::{validate, MAX_CONCURRENT_BOOKS};
