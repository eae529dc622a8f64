//! Catalog walker
//!
//! Discovers the categories from the root page's navigation sidebar and
//! scrapes them one after another, each into its own CSV file.

use crate::crawler::Crawler;
use crate::extract::{parse_category_nav, CategoryNav};
use crate::model::Category;
use crate::output::{ensure_directory, open_category_output, CategoryReport, RunSummary};
use crate::Result;
use std::collections::HashSet;
use url::Url;

impl Crawler {
    /// Fetches the root page and lists its navigation categories
    ///
    /// Category URLs are resolved against `root`. Names that collide once
    /// sanitized get a numeric suffix, so every category owns its own CSV
    /// file and cover directory.
    pub async fn discover_categories(&self, root: &Url) -> Result<CategoryNav> {
        let html = self.fetcher.fetch_html(root).await?;
        let mut nav = parse_category_nav(&html, root)?;
        assign_unique_names(&mut nav.categories);
        Ok(nav)
    }

    /// Walks the whole catalog
    ///
    /// Categories are processed strictly in navigation order, one fully
    /// drained before the next starts. A category that fails is logged,
    /// recorded in the summary, and the walk moves on.
    ///
    /// # Errors
    ///
    /// Only failures before any category starts: creating the output root,
    /// or fetching and parsing the root navigation page.
    pub async fn walk_catalog(&self, root: &Url) -> Result<RunSummary> {
        ensure_directory(self.output_root())?;

        let CategoryNav {
            categories,
            dropped,
        } = self.discover_categories(root).await?;
        tracing::info!("Discovered {} categories at {}", categories.len(), root);
        if dropped > 0 {
            tracing::warn!("{} sidebar entries at {} were unusable", dropped, root);
        }

        let mut summary = RunSummary::start();
        summary.categories_dropped = dropped;
        let total = categories.len();

        for (index, category) in categories.iter().enumerate() {
            tracing::info!("[{}/{}] Scraping category '{}'", index + 1, total, category.name);
            let report = self.scrape_category(category).await;
            summary.categories.push(report);
        }

        summary.finish();

        tracing::info!(
            "Scrape finished: {} books written, {} skipped, {} of {} categories failed",
            summary.books_written(),
            summary.books_skipped(),
            summary.categories_failed(),
            total
        );

        Ok(summary)
    }

    /// Scrapes one category into `<output>/<name>.csv`, never failing the walk
    async fn scrape_category(&self, category: &Category) -> CategoryReport {
        let mut report = CategoryReport::new(&category.name);

        let result = match open_category_output(self.output_root(), &category.name) {
            Ok(mut sink) => {
                self.paginate_category(category, &mut sink, &mut report)
                    .await
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => tracing::info!(
                "Category '{}': {} rows over {} pages, {} books skipped",
                category.name,
                report.rows,
                report.pages,
                report.skipped
            ),
            Err(e) => {
                tracing::error!("Category '{}' failed: {}", category.name, e);
                report.error = Some(e.to_string());
            }
        }

        report
    }
}

/// Renames categories whose names clash with an earlier one
///
/// Comparison ignores case, as output may land on a case-insensitive
/// filesystem. The second "Poetry" becomes "Poetry_2", the third "Poetry_3".
fn assign_unique_names(categories: &mut [Category]) {
    let mut used: HashSet<String> = HashSet::new();

    for category in categories.iter_mut() {
        if used.insert(category.name.to_lowercase()) {
            continue;
        }

        let mut suffix = 2;
        let unique = loop {
            let candidate = format!("{}_{}", category.name, suffix);
            if used.insert(candidate.to_lowercase()) {
                break candidate;
            }
            suffix += 1;
        };

        tracing::warn!(
            "Category '{}' at {} clashes with an earlier one, writing it as '{}'",
            category.name,
            category.url,
            unique
        );
        category.name = unique;
    }
}
