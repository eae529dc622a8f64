//! Book page scraper

use crate::config::CategoryLabel;
use crate::crawler::Crawler;
use crate::extract::{extract_book_fields, normalize_availability, normalize_rating};
use crate::model::{BookRecord, Category};
use crate::output::save_cover;
use crate::url::{product_slug, resolve_link};
use crate::{Result, ScrapeError};
use url::Url;

impl Crawler {
    /// Scrapes one product page into a `BookRecord`
    ///
    /// Fetches and parses the page, normalizes availability and rating,
    /// resolves the cover image against the product page URL, then downloads
    /// the cover to `<output>/<category>/<product-slug>.jpg`.
    ///
    /// # Arguments
    ///
    /// * `url` - Product page URL
    /// * `category` - Category being walked; names the cover directory
    ///
    /// # Errors
    ///
    /// Any fetch, parse, missing-field or normalization failure, and failures
    /// writing the cover. Nothing is retried.
    pub async fn scrape_book(&self, url: &Url, category: &Category) -> Result<BookRecord> {
        let html = self.fetcher.fetch_html(url).await?;
        let fields = extract_book_fields(&html, url)?;

        let number_available = normalize_availability(&fields.availability)?;
        let review_rating = normalize_rating(&fields.rating_classes)?;
        let image_url = resolve_link(url, &fields.image_src)?;

        let slug = product_slug(url)
            .ok_or_else(|| ScrapeError::parse(url.as_str(), "no path segment to name the cover after"))?;

        let bytes = self.fetcher.fetch_bytes(&image_url).await?;
        let cover = save_cover(self.output_root(), &category.name, &slug, &bytes).await?;
        tracing::debug!("Saved cover {}", cover.display());

        if fields.breadcrumb_category != category.name {
            tracing::warn!(
                "Book {} is listed under '{}' but its breadcrumb says '{}'",
                url,
                category.name,
                fields.breadcrumb_category
            );
        }

        let category_label = match self.config.crawler.category_label {
            CategoryLabel::Breadcrumb => fields.breadcrumb_category,
            CategoryLabel::Listing => category.name.clone(),
        };

        Ok(BookRecord {
            product_page_url: url.to_string(),
            universal_product_code: fields.upc,
            title: fields.title,
            price_including_tax: fields.price_including_tax,
            price_excluding_tax: fields.price_excluding_tax,
            number_available,
            product_description: fields.description,
            category: category_label,
            review_rating,
            image_url: image_url.to_string(),
        })
    }
}
