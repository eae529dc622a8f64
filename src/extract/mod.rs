//! HTML extraction for catalog pages
//!
//! This module turns fetched HTML into typed data:
//! - product page fields (`fields`)
//! - availability and rating normalization (`normalize`)
//! - listing page links and the category sidebar (`listing`)
//!
//! Every traversal step is an explicit presence check that reports a
//! `ScrapeError::Parse` or `ScrapeError::MissingField` naming what was absent.

mod fields;
mod listing;
mod normalize;

pub use fields::extract_book_fields;
pub use listing::{parse_category_nav, parse_listing_page, CategoryNav, ListingPage};
pub use normalize::{normalize_availability, normalize_rating};

use crate::{Result, ScrapeError};
use scraper::{ElementRef, Selector};
use url::Url;

/// Compiles a CSS selector, reporting failures against the page being parsed
pub(crate) fn parse_selector(css: &str, page_url: &Url) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        ScrapeError::parse(page_url.as_str(), format!("invalid selector '{}': {:?}", css, e))
    })
}

/// Concatenated, trimmed text content of an element
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
