//! Crawler module for catalog fetching and processing
//!
//! This module contains the scraping pipeline:
//! - HTTP fetching (`fetcher`)
//! - Catalog walk over the navigation categories (`walker`)
//! - Pagination through a category's listing (`paginator`)
//! - Product page scraping and cover download (`book`)

mod book;
mod coordinator;
mod fetcher;
mod paginator;
mod walker;

pub use coordinator::{run_scrape, Crawler};
pub use fetcher::{build_http_client, Fetcher};
