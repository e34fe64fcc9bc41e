//! Small helpers over the `scraper` crate shared by both extractors.
//!
//! The split matters for error reporting: a selector constant that fails
//! to parse is a programming error (`ScrapeError::Selector`), while an
//! element that simply is not on the page comes back as `None`/empty and
//! gets downgraded to a sentinel by the caller.

use scraper::{ElementRef, Html, Selector};

use crate::errors::ScrapeError;

pub fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("{selector}: {e}")))
}

/// Element text with runs of whitespace collapsed to single spaces.
pub fn normalized_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<Vec<_>>()
        .join(" ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Non-empty texts of every element matching `selector`, in DOM order.
pub fn collect_texts(document: &Html, selector: &str) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document
        .select(&sel)
        .map(normalized_text)
        .filter(|t| !t.is_empty())
        .collect())
}

/// Non-empty values of `attr` on every element matching `selector`.
pub fn collect_attrs(
    document: &Html,
    selector: &str,
    attr: &str,
) -> Result<Vec<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document
        .select(&sel)
        .filter_map(|el| el.value().attr(attr))
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect())
}

/// Text of the first match, or `None` when the page does not have one.
pub fn first_text(document: &Html, selector: &str) -> Result<Option<String>, ScrapeError> {
    let sel = parse_selector(selector)?;
    Ok(document
        .select(&sel)
        .next()
        .map(normalized_text)
        .filter(|t| !t.is_empty()))
}
