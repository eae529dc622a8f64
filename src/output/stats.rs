//! Run statistics for a catalog walk
//!
//! The crawler fills one `CategoryReport` per category; the binary prints the
//! resulting `RunSummary` when the walk ends.

use chrono::{DateTime, Utc};

/// Outcome of scraping one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryReport {
    /// Category name (also the CSV file stem)
    pub name: String,

    /// Listing pages processed
    pub pages: u32,

    /// Rows written to the category CSV
    pub rows: usize,

    /// Book pages that failed and were skipped
    pub skipped: usize,

    /// Set when the category was abandoned part way through
    pub error: Option<String>,
}

impl CategoryReport {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Summary of a full catalog walk
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub categories: Vec<CategoryReport>,

    /// Sidebar entries that could not become a category
    pub categories_dropped: usize,
}

impl RunSummary {
    pub fn start() -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            categories: Vec::new(),
            categories_dropped: 0,
        }
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn duration_seconds(&self) -> Option<i64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_seconds())
    }

    /// Rows written across all categories; every row has one saved cover
    pub fn books_written(&self) -> usize {
        self.categories.iter().map(|c| c.rows).sum()
    }

    pub fn books_skipped(&self) -> usize {
        self.categories.iter().map(|c| c.skipped).sum()
    }

    pub fn categories_failed(&self) -> usize {
        self.categories.iter().filter(|c| c.is_failed()).count()
    }

    /// True when any book or category could not be scraped
    pub fn has_failures(&self) -> bool {
        self.books_skipped() > 0 || self.categories_failed() > 0 || self.categories_dropped > 0
    }
}

/// Prints a run summary to stdout in a formatted manner
pub fn print_summary(summary: &RunSummary) {
    println!("=== Scrape Summary ===\n");

    println!("Overview:");
    println!("  Started: {}", summary.started_at.to_rfc3339());
    if let Some(finished) = summary.finished_at {
        println!("  Finished: {}", finished.to_rfc3339());
    }
    if let Some(duration) = summary.duration_seconds() {
        println!(
            "  Duration: {} seconds ({:.2} minutes)",
            duration,
            duration as f64 / 60.0
        );
    }
    println!("  Categories: {}", summary.categories.len());
    if summary.categories_dropped > 0 {
        println!("  Unusable sidebar entries: {}", summary.categories_dropped);
    }
    println!("  Books written: {}", summary.books_written());
    println!("  Books skipped: {}", summary.books_skipped());
    println!();

    println!("Categories:");
    for report in &summary.categories {
        println!(
            "  {}: {} rows, {} skipped, {} pages",
            report.name, report.rows, report.skipped, report.pages
        );
    }
    println!();

    let failed: Vec<_> = summary.categories.iter().filter(|c| c.is_failed()).collect();
    if !failed.is_empty() {
        println!("Failed Categories ({}):", failed.len());
        for report in failed {
            println!(
                "  - {}: {}",
                report.name,
                report.error.as_deref().unwrap_or_default()
            );
        }
        println!();
    }
}
