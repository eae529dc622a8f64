use url::Url;

/// A category discovered from the site navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Trimmed link text, made safe for use as a file name
    pub name: String,

    /// First listing page of the category
    pub url: Url,
}

impl Category {
    pub fn new(name: impl Into<String>, url: Url) -> Self {
        Self {
            name: name.into(),
            url,
        }
    }

    /// File name of this category's CSV output
    pub fn csv_file_name(&self) -> String {
        format!("{}.csv", self.name)
    }
}
