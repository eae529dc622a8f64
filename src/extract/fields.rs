//! Field extraction from a product page
//!
//! A product page carries:
//! - a key/value information table (UPC, both prices, availability)
//! - the title as the main heading of the product block
//! - an optional description paragraph after the description anchor
//! - a breadcrumb trail whose third entry is the category
//! - a rating indicator whose second class token spells the rating
//! - the cover image

use crate::extract::{element_text, parse_selector};
use crate::model::RawBookFields;
use crate::{Result, ScrapeError};
use scraper::{ElementRef, Html};
use std::collections::HashMap;
use url::Url;

const LABEL_UPC: &str = "UPC";
const LABEL_PRICE_INCL_TAX: &str = "Price (incl. tax)";
const LABEL_PRICE_EXCL_TAX: &str = "Price (excl. tax)";
const LABEL_AVAILABILITY: &str = "Availability";

/// Zero-based breadcrumb position of the category entry
const BREADCRUMB_CATEGORY_INDEX: usize = 2;

/// Extracts the raw field set from a product page
///
/// # Arguments
///
/// * `html` - The product page HTML
/// * `page_url` - URL the page was fetched from, used in error reports
///
/// # Returns
///
/// * `Ok(RawBookFields)` - All required fields were found
/// * `Err(ScrapeError::Parse)` - The information table is absent
/// * `Err(ScrapeError::MissingField)` - A required field is absent
pub fn extract_book_fields(html: &str, page_url: &Url) -> Result<RawBookFields> {
    let document = Html::parse_document(html);
    let url = page_url.as_str();

    let table = extract_info_table(&document, page_url)?;
    let take = |label: &'static str| -> Result<String> {
        table
            .get(label)
            .cloned()
            .ok_or_else(|| ScrapeError::missing(url, label))
    };

    Ok(RawBookFields {
        upc: take(LABEL_UPC)?,
        price_including_tax: take(LABEL_PRICE_INCL_TAX)?,
        price_excluding_tax: take(LABEL_PRICE_EXCL_TAX)?,
        availability: take(LABEL_AVAILABILITY)?,
        title: extract_title(&document, page_url)?,
        description: extract_description(&document, page_url)?,
        breadcrumb_category: extract_breadcrumb_category(&document, page_url)?,
        rating_classes: extract_rating_classes(&document, page_url)?,
        image_src: extract_image_src(&document, page_url)?,
    })
}

/// Reads the information table into a header -> value map
fn extract_info_table(document: &Html, page_url: &Url) -> Result<HashMap<String, String>> {
    let table_selector = parse_selector("table.table-striped", page_url)?;
    let row_selector = parse_selector("tr", page_url)?;
    let th_selector = parse_selector("th", page_url)?;
    let td_selector = parse_selector("td", page_url)?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ScrapeError::parse(page_url.as_str(), "product information table not found"))?;

    let mut rows = HashMap::new();
    for row in table.select(&row_selector) {
        let header = row.select(&th_selector).next().map(element_text);
        let value = row.select(&td_selector).next().map(element_text);
        if let (Some(header), Some(value)) = (header, value) {
            rows.insert(header, value);
        }
    }

    Ok(rows)
}

fn extract_title(document: &Html, page_url: &Url) -> Result<String> {
    let selector = parse_selector(".product_main h1", page_url)?;

    document
        .select(&selector)
        .next()
        .map(element_text)
        .ok_or_else(|| ScrapeError::missing(page_url.as_str(), "title"))
}

/// Description paragraph, or the empty string when the page has none
fn extract_description(document: &Html, page_url: &Url) -> Result<String> {
    let selector = parse_selector("#product_description ~ p", page_url)?;

    Ok(document
        .select(&selector)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

fn extract_breadcrumb_category(document: &Html, page_url: &Url) -> Result<String> {
    let selector = parse_selector("ul.breadcrumb > li", page_url)?;

    document
        .select(&selector)
        .nth(BREADCRUMB_CATEGORY_INDEX)
        .map(element_text)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ScrapeError::missing(page_url.as_str(), "category"))
}

fn extract_rating_classes(document: &Html, page_url: &Url) -> Result<Vec<String>> {
    let selector = parse_selector(".star-rating", page_url)?;

    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| ScrapeError::missing(page_url.as_str(), "review_rating"))?;

    Ok(class_tokens(element))
}

/// `src` of the cover image, as written on the page
fn extract_image_src(document: &Html, page_url: &Url) -> Result<String> {
    let selector = parse_selector("img[src]", page_url)?;

    document
        .select(&selector)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
        .ok_or_else(|| ScrapeError::missing(page_url.as_str(), "image_url"))
}

/// Class attribute tokens in document order
fn class_tokens(element: ElementRef<'_>) -> Vec<String> {
    element
        .value()
        .attr("class")
        .map(|classes| classes.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
