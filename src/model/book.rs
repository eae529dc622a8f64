//! Book data produced while scraping a product page

use serde::Serialize;

/// Raw field set pulled off a product page, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBookFields {
    pub upc: String,
    pub price_including_tax: String,
    pub price_excluding_tax: String,
    /// Free text such as "In stock (22 available)"
    pub availability: String,
    pub title: String,
    /// Empty when the page has no description block
    pub description: String,
    /// Third breadcrumb entry, trimmed
    pub breadcrumb_category: String,
    /// Class tokens of the rating indicator, e.g. `["star-rating", "Three"]`
    pub rating_classes: Vec<String>,
    /// `src` of the cover image as written on the page
    pub image_src: String,
}

/// One output row: everything known about a single product page
///
/// Serialized field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookRecord {
    pub product_page_url: String,

    #[serde(rename = "universal_product_code (upc)")]
    pub universal_product_code: String,

    pub title: String,

    pub price_including_tax: String,

    pub price_excluding_tax: String,

    pub number_available: u32,

    pub product_description: String,

    pub category: String,

    /// 1 to 5
    pub review_rating: u8,

    /// Always absolute
    pub image_url: String,
}

impl BookRecord {
    /// CSV header row, in column order
    pub const HEADERS: [&'static str; 10] = [
        "product_page_url",
        "universal_product_code (upc)",
        "title",
        "price_including_tax",
        "price_excluding_tax",
        "number_available",
        "product_description",
        "category",
        "review_rating",
        "image_url",
    ];
}
