// src/domain/prices.rs

/// Stand-in value for a field the page simply does not show.
pub const SENTINEL: &str = "N/A";

/// Picks the was/now pair out of a detail page's price texts. The page
/// renders the old price before the discounted one, and price cells are
/// the only dynamic-field cells containing a currency symbol.
pub fn split_price_pair(texts: &[String]) -> (String, String) {
    let mut prices = texts.iter().filter(|t| t.contains('$'));

    let was_price = prices
        .next()
        .cloned()
        .unwrap_or_else(|| SENTINEL.to_string());
    let now_price = prices
        .next()
        .cloned()
        .unwrap_or_else(|| SENTINEL.to_string());

    (was_price, now_price)
}
