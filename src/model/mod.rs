//! Data model for scraped catalog content
//!
//! - `Category`: a navigation entry that drives one CSV file
//! - `RawBookFields`: text pulled off a product page by the extractor
//! - `BookRecord`: a normalized output row

mod book;
mod category;

pub use book::{BookRecord, RawBookFields};
pub use category::Category;
