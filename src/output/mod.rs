//! Output module for scraped data
//!
//! This module handles:
//! - Creating the output directory tree
//! - Writing one CSV per category, row by row
//! - Saving cover images next to the category CSV
//! - Recording run statistics

mod sink;
pub mod stats;

pub use sink::{ensure_directory, open_category_output, save_cover, CategoryWriter};
pub use stats::{print_summary, CategoryReport, RunSummary};
