//! File names derived from site content

use url::Url;

/// Trailing path segment the catalog uses for every product and listing page
const INDEX_SEGMENT: &str = "index.html";

/// Characters that cannot appear in a file name on common filesystems
const FORBIDDEN_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Derives the cover image file stem from a product page URL
///
/// `https://host/catalogue/a-light-in-the-attic_1000/index.html` gives
/// `a-light-in-the-attic_1000`. Returns None when the path carries no
/// usable segment.
pub fn product_slug(url: &Url) -> Option<String> {
    let segments: Vec<&str> = url
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .collect();

    let last = match segments.split_last() {
        Some((&INDEX_SEGMENT, rest)) => *rest.last()?,
        Some((last, _)) => *last,
        None => return None,
    };

    let stem = last.strip_suffix(".html").unwrap_or(last);
    let slug = sanitize(stem);

    if slug.is_empty() || slug == "." || slug == ".." {
        None
    } else {
        Some(slug)
    }
}

/// Turns category link text into a name usable for a file and a directory
///
/// Surrounding whitespace is trimmed and path separators are replaced.
/// Returns None when nothing is left.
pub fn sanitize_category_name(text: &str) -> Option<String> {
    let name = sanitize(text.trim());

    if name.is_empty() || name.chars().all(|c| c == '.') {
        None
    } else {
        Some(name)
    }
}

fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if FORBIDDEN_CHARS.contains(&c) || c.is_control() {
                '_'
            } else {
                c
            }
        })
        .collect()
}
