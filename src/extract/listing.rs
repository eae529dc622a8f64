//! Listing page and navigation parsing
//!
//! A category listing page shows a grid of books and, except on the last
//! page, a "next" link. The catalog root carries the category sidebar.

use crate::extract::{element_text, parse_selector};
use crate::model::Category;
use crate::url::{resolve_link, sanitize_category_name};
use crate::{Result, ScrapeError};
use scraper::Html;
use url::Url;

/// Links found on one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPage {
    /// Product page URLs, in listing order
    pub book_urls: Vec<Url>,

    /// Next listing page, None on the last page
    pub next_page: Option<Url>,

    /// Listed entries left out of `book_urls` for lack of a usable link
    pub dropped: usize,
}

/// Categories found in the navigation sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryNav {
    /// Categories in sidebar order
    pub categories: Vec<Category>,

    /// Sidebar entries left out for lack of a usable link or name
    pub dropped: usize,
}

/// Parses a category listing page
///
/// Book links and the "next" link are resolved against `page_url`, the
/// listing page itself. A listed entry without a usable link is logged and
/// counted in `dropped`.
///
/// # Errors
///
/// * `ScrapeError::Parse` - the book list container is absent
/// * `ScrapeError::UrlParse` - the "next" link cannot be resolved
pub fn parse_listing_page(html: &str, page_url: &Url) -> Result<ListingPage> {
    let document = Html::parse_document(html);

    let container_selector = parse_selector("section .row", page_url)?;
    let item_selector = parse_selector("li", page_url)?;
    let link_selector = parse_selector("a[href]", page_url)?;
    let next_selector = parse_selector("li.next a[href]", page_url)?;

    let container = document
        .select(&container_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse(page_url.as_str(), "book list container not found"))?;

    let mut book_urls = Vec::new();
    let mut dropped = 0;
    for (position, item) in container.select(&item_selector).enumerate() {
        let Some(href) = item
            .select(&link_selector)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            tracing::warn!("Listed book #{} on {} has no link", position + 1, page_url);
            dropped += 1;
            continue;
        };

        match resolve_link(page_url, href) {
            Ok(url) => book_urls.push(url),
            Err(e) => {
                tracing::warn!("Skipping listed book #{} on {}: {}", position + 1, page_url, e);
                dropped += 1;
            }
        }
    }

    let next_page = document
        .select(&next_selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| resolve_link(page_url, href))
        .transpose()?;

    Ok(ListingPage {
        book_urls,
        next_page,
        dropped,
    })
}

/// Parses the category sidebar of the catalog root
///
/// Each entry's link is resolved against `root_url`; its trimmed text becomes
/// the category name. Entries without a link or a usable name are logged and
/// counted in `dropped`.
///
/// # Errors
///
/// `ScrapeError::Parse` when the navigation list is absent.
pub fn parse_category_nav(html: &str, root_url: &Url) -> Result<CategoryNav> {
    let document = Html::parse_document(html);

    let nav_selector = parse_selector("ul.nav-list ul", root_url)?;
    let entry_selector = parse_selector("li > a[href]", root_url)?;

    let nav = document
        .select(&nav_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse(root_url.as_str(), "category navigation list not found"))?;

    let mut categories = Vec::new();
    let mut dropped = 0;
    for link in nav.select(&entry_selector) {
        let text = element_text(link);
        let Some(name) = sanitize_category_name(&text) else {
            tracing::warn!("Skipping category link with unusable name '{}'", text);
            dropped += 1;
            continue;
        };

        let href = link.value().attr("href").unwrap_or_default();
        match resolve_link(root_url, href) {
            Ok(url) => categories.push(Category::new(name, url)),
            Err(e) => {
                tracing::warn!("Skipping category '{}': {}", name, e);
                dropped += 1;
            }
        }
    }

    Ok(CategoryNav {
        categories,
        dropped,
    })
}
