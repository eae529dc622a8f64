//! Persistence sink: output directories, per-category CSV files and cover images
//!
//! Rows are flushed as they are written, so a run that aborts leaves every
//! row written so far on disk.

use crate::model::BookRecord;
use crate::Result;
use csv::WriterBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Creates a directory tree if it is absent
///
/// Succeeds without change when the directory already exists.
pub fn ensure_directory(path: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(path)
}

/// Streaming writer for one category's CSV file
pub struct CategoryWriter {
    writer: csv::Writer<File>,
    path: PathBuf,
    rows: usize,
}

/// Creates (or truncates) `<root>/<name>.csv` and writes the header row
///
/// # Arguments
///
/// * `root` - Output root directory, created if missing
/// * `name` - Filesystem-safe category name
pub fn open_category_output(root: &Path, name: &str) -> Result<CategoryWriter> {
    ensure_directory(root)?;

    let path = root.join(format!("{}.csv", name));
    let file = File::create(&path)?;

    // Header is written by hand so empty categories still get one
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
    writer.write_record(BookRecord::HEADERS)?;
    writer.flush()?;

    tracing::debug!("Opened category output {}", path.display());

    Ok(CategoryWriter {
        writer,
        path,
        rows: 0,
    })
}

impl CategoryWriter {
    /// Appends one row, columns in `BookRecord::HEADERS` order
    pub fn write_record(&mut self, record: &BookRecord) -> Result<()> {
        self.writer.serialize(record)?;
        self.writer.flush()?;
        self.rows += 1;
        Ok(())
    }

    /// Number of rows written so far, header excluded
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes cover image bytes to `<root>/<category>/<slug>.jpg`
///
/// The category directory is created if missing. Returns the written path.
pub async fn save_cover(root: &Path, category: &str, slug: &str, bytes: &[u8]) -> Result<PathBuf> {
    let folder = root.join(category);
    tokio::fs::create_dir_all(&folder).await?;

    let path = folder.join(format!("{}.jpg", slug));
    tokio::fs::write(&path, bytes).await?;

    Ok(path)
}
