use std::thread;
use std::time::Duration;

use scraper::Html;

use super::dom::{collect_attrs, collect_texts, first_text, normalized_text, parse_selector};
use super::models::{ListingDetail, ListingSummary};
use super::selectors;
use crate::browser;
use crate::domain::{make_sku, split_price_pair, SENTINEL};
use crate::errors::ScrapeError;

/// How long a detail page gets to finish client-side rendering before
/// the DOM snapshot is taken.
const RENDER_WAIT: Duration = Duration::from_secs(5);

/// Opens a fresh browser session, renders one detail page, and builds
/// the combined record. The session is dropped (and its process killed)
/// before this returns.
pub fn fetch_detail(
    summary: &ListingSummary,
    index: usize,
    start_num: u32,
) -> Result<ListingDetail, ScrapeError> {
    let browser = browser::launch()?;
    let tab = browser
        .new_tab()
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;

    tab.navigate_to(&summary.url)
        .map_err(|e| ScrapeError::Navigation(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| ScrapeError::Navigation(e.to_string()))?;
    thread::sleep(RENDER_WAIT);

    let html = tab
        .get_content()
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;

    extract_detail(&html, summary, index, start_num)
}

/// Pure extraction over a rendered DOM snapshot.
///
/// Every field is independently best-effort: a missing element yields
/// the sentinel or an empty collection and never aborts the record.
/// Only a broken selector constant is an error.
pub fn extract_detail(
    html: &str,
    summary: &ListingSummary,
    index: usize,
    start_num: u32,
) -> Result<ListingDetail, ScrapeError> {
    let document = Html::parse_document(html);

    let price_texts = collect_texts(&document, selectors::DETAIL_PRICES)?;
    let (was_price, now_price) = split_price_pair(&price_texts);

    let status =
        first_text(&document, selectors::CONDITION_BADGE)?.unwrap_or_else(|| SENTINEL.to_string());

    let detail_images = collect_attrs(&document, selectors::CAROUSEL_LINKS, "href")?
        .into_iter()
        .filter(|href| href.ends_with(".jpg"))
        .collect();

    let description = collect_texts(&document, selectors::DESCRIPTION_PARAGRAPHS)?.join(" ");

    let specifications = extract_specifications(&document)?;

    Ok(ListingDetail {
        sku: make_sku(&status, index, start_num),
        title: summary.title.clone(),
        list_price: summary.price.clone(),
        listing_url: summary.url.clone(),
        listing_image: summary.image.clone(),
        was_price,
        now_price,
        status,
        description,
        detail_images,
        specifications,
    })
}

/// Label/value pairs from the spec table. Rows without two cells or with
/// an empty label carry nothing usable and are skipped individually;
/// partial tables are fine.
fn extract_specifications(document: &Html) -> Result<Vec<(String, String)>, ScrapeError> {
    let rows = parse_selector(selectors::SPEC_ROWS)?;
    let cells = parse_selector(selectors::SPEC_CELLS)?;

    let mut specs = Vec::new();
    for row in document.select(&rows) {
        let mut row_cells = row.select(&cells);
        let (Some(key_cell), Some(value_cell)) = (row_cells.next(), row_cells.next()) else {
            continue;
        };

        let key = normalized_text(key_cell);
        if key.is_empty() {
            continue;
        }
        specs.push((key, normalized_text(value_cell)));
    }

    Ok(specs)
}
