//! URL handling module for Bookshelf-Scraper
//!
//! This module provides link resolution against the page a link was found on,
//! and the file names derived from URLs and link text.

mod naming;
mod resolve;

// Re-export main functions
pub use naming::{product_slug, sanitize_category_name};
pub use resolve::resolve_link;
