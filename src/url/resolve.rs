use crate::{Result, ScrapeError};
use url::Url;

/// Resolves a link href against the page it was found on
///
/// Relative hrefs are joined onto `base`, so a listing's `../../book_1/index.html`
/// lands next to the catalogue, and a product page's `../../media/cover.jpg`
/// lands under the site media directory.
///
/// # Errors
///
/// * `ScrapeError::Parse` - empty href, or a result outside http/https
/// * `ScrapeError::UrlParse` - href cannot be joined onto `base`
///
/// # Example
///
/// ```
/// use bookshelf_scraper::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://books.example.com/catalogue/category/books/poetry_23/index.html").unwrap();
/// let next = resolve_link(&base, "page-2.html").unwrap();
/// assert_eq!(next.as_str(), "https://books.example.com/catalogue/category/books/poetry_23/page-2.html");
/// ```
pub fn resolve_link(base: &Url, href: &str) -> Result<Url> {
    let href = href.trim();

    if href.is_empty() {
        return Err(ScrapeError::parse(base.as_str(), "empty link href"));
    }

    let absolute = base.join(href)?;

    // Only accept HTTP and HTTPS URLs
    match absolute.scheme() {
        "http" | "https" => Ok(absolute),
        other => Err(ScrapeError::parse(
            base.as_str(),
            format!("link '{}' resolves to unsupported scheme '{}'", href, other),
        )),
    }
}
