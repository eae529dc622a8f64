//! Normalization of free-text availability and class-encoded ratings

use crate::{Result, ScrapeError};

/// Spelled-out rating words accepted on the rating indicator, in value order
const RATING_WORDS: [&str; 5] = ["one", "two", "three", "four", "five"];

/// Converts availability text into the number of copies available
///
/// Every ASCII digit in the text is concatenated in order and the result is
/// parsed, so "In stock (22 available)" gives 22.
///
/// # Errors
///
/// `ScrapeError::ParseNumber` when the text holds no digits (e.g. "Out of
/// stock") or the digits overflow.
pub fn normalize_availability(text: &str) -> Result<u32> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(ScrapeError::ParseNumber(text.to_string()));
    }

    digits
        .parse()
        .map_err(|_| ScrapeError::ParseNumber(text.to_string()))
}

/// Converts the rating indicator's class list into a 1-5 rating
///
/// The second class token holds the rating word, e.g. `["star-rating", "Three"]`.
/// Matching ignores case.
///
/// # Errors
///
/// `ScrapeError::UnrecognizedRating` when there is no second token or it is
/// not one of one..five.
pub fn normalize_rating<S: AsRef<str>>(classes: &[S]) -> Result<u8> {
    let word = classes
        .get(1)
        .map(|class| class.as_ref().trim())
        .ok_or_else(|| ScrapeError::UnrecognizedRating(String::new()))?;

    RATING_WORDS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(word))
        .map(|index| index as u8 + 1)
        .ok_or_else(|| ScrapeError::UnrecognizedRating(word.to_string()))
}
