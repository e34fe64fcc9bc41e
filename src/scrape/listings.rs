use scraper::Html;

use super::dom::{collect_attrs, collect_texts};
use super::models::ListingSummary;
use super::selectors;
use crate::errors::ScrapeError;

/// Reads the fully scrolled index page and pairs up titles, prices,
/// URLs and thumbnails by position.
///
/// The four collections are queried independently, so the shortest one
/// decides how many cards can be paired. When the page's structure
/// shifts the counts apart this silently yields fewer records rather
/// than mispaired ones.
pub fn extract_summaries(html: &str) -> Result<Vec<ListingSummary>, ScrapeError> {
    let document = Html::parse_document(html);

    let titles = collect_texts(&document, selectors::TITLES)?;
    let prices = collect_texts(&document, selectors::PRICES)?;
    let urls = collect_attrs(&document, selectors::URLS, "href")?;
    let images = collect_attrs(&document, selectors::IMAGES, "src")?;

    let length = titles
        .len()
        .min(prices.len())
        .min(urls.len())
        .min(images.len());

    let summaries = (0..length)
        .map(|i| ListingSummary {
            title: titles[i].clone(),
            price: prices[i].clone(),
            url: urls[i].clone(),
            image: images[i].clone(),
        })
        .collect();

    Ok(summaries)
}
