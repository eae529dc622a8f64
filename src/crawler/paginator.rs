//! Category paginator
//!
//! Walks a category's listing pages by following "next" links, scraping every
//! listed book and streaming each record into the category's CSV as soon as
//! it is ready.

use crate::crawler::Crawler;
use crate::extract::parse_listing_page;
use crate::model::Category;
use crate::output::{CategoryReport, CategoryWriter};
use crate::{Result, ScrapeError};
use futures::stream::{self, StreamExt};
use std::collections::HashSet;
use url::Url;

impl Crawler {
    /// Scrapes every book of a category into `sink`
    ///
    /// Listing pages are followed until one has no "next" link. A book page
    /// that fails, or a listed entry without a usable link, is logged and
    /// counted in `report.skipped`; the rest of the category carries on.
    /// Progress is recorded in `report` as it happens, so it stays accurate
    /// when an error ends the category early.
    ///
    /// # Errors
    ///
    /// * Listing page fetch or parse failures
    /// * `ScrapeError::PaginationCycle` - a "next" link leads back to a visited page
    /// * `ScrapeError::PaginationLimit` - more than `max-pages-per-category` pages
    /// * Failures writing to `sink`
    pub async fn paginate_category(
        &self,
        category: &Category,
        sink: &mut CategoryWriter,
        report: &mut CategoryReport,
    ) -> Result<()> {
        let limit = self.config.crawler.max_pages_per_category;
        let mut visited: HashSet<Url> = HashSet::new();
        let mut current = category.url.clone();

        loop {
            if !visited.insert(current.clone()) {
                return Err(ScrapeError::PaginationCycle {
                    url: current.to_string(),
                });
            }

            if report.pages >= limit {
                return Err(ScrapeError::PaginationLimit {
                    url: current.to_string(),
                    limit,
                });
            }

            let html = self.fetcher.fetch_html(&current).await?;
            let listing = parse_listing_page(&html, &current)?;
            report.pages += 1;
            report.skipped += listing.dropped;

            tracing::debug!(
                "Listing page {} of '{}' has {} books",
                report.pages,
                category.name,
                listing.book_urls.len()
            );

            self.scrape_listed_books(&listing.book_urls, category, sink, report)
                .await?;

            match listing.next_page {
                Some(next) => current = next,
                None => break,
            }
        }

        Ok(())
    }

    /// Scrapes one listing page's books, at most `max-concurrent-books` at a time
    ///
    /// Rows are written in completion order from this task only.
    async fn scrape_listed_books(
        &self,
        book_urls: &[Url],
        category: &Category,
        sink: &mut CategoryWriter,
        report: &mut CategoryReport,
    ) -> Result<()> {
        let concurrency = self.config.crawler.max_concurrent_books.max(1);

        let mut results = stream::iter(book_urls)
            .map(|url| async move { (url, self.scrape_book(url, category).await) })
            .buffer_unordered(concurrency);

        while let Some((url, result)) = results.next().await {
            match result {
                Ok(record) => {
                    sink.write_record(&record)?;
                    report.rows += 1;
                    tracing::debug!("Wrote '{}' to {}", record.title, sink.path().display());
                }
                Err(e) => {
                    report.skipped += 1;
                    tracing::warn!("Skipping book {}: {}", url, e);
                }
            }
        }

        Ok(())
    }
}
