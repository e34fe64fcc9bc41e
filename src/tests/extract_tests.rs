use crate::scrape::{extract_detail, extract_summaries, ListingSummary};
use crate::tests::fixtures::{detail_page, listing_page};

fn summary() -> ListingSummary {
    ListingSummary {
        title: "Caravan 0".into(),
        price: "$84,990".into(),
        url: "https://example.com/listing/0/".into(),
        image: "https://example.com/thumb/0.jpg".into(),
    }
}

#[test]
fn equal_collections_pair_fully() {
    let summaries = extract_summaries(&listing_page(5, 5, 5, 5)).unwrap();

    assert_eq!(summaries.len(), 5);
    assert_eq!(summaries[0].title, "Caravan 0");
    assert_eq!(summaries[4].url, "https://example.com/listing/4/");
    assert_eq!(summaries[2].image, "https://example.com/thumb/2.jpg");
}

#[test]
fn shortest_collection_truncates() {
    // Only three price cells rendered: pairing stops at three records.
    let summaries = extract_summaries(&listing_page(5, 3, 5, 5)).unwrap();

    assert_eq!(summaries.len(), 3);
    assert_eq!(summaries[2].title, "Caravan 2");
    assert_eq!(summaries[2].price, "$2,990");
}

#[test]
fn empty_page_yields_no_summaries() {
    let summaries = extract_summaries("<html><body></body></html>").unwrap();
    assert!(summaries.is_empty());
}

#[test]
fn detail_extracts_price_pair_from_dollar_cells() {
    let detail = extract_detail(&detail_page(), &summary(), 0, 50).unwrap();

    // "Sleeps 4" has no currency symbol and must not shift the pair.
    assert_eq!(detail.was_price, "$89,990");
    assert_eq!(detail.now_price, "$79,990");
}

#[test]
fn detail_reads_status_and_derives_sku() {
    let detail = extract_detail(&detail_page(), &summary(), 2, 50).unwrap();

    assert_eq!(detail.status, "Brand New");
    assert_eq!(detail.sku, "CFS-N-0052");
}

#[test]
fn detail_keeps_only_jpg_carousel_links() {
    let detail = extract_detail(&detail_page(), &summary(), 0, 50).unwrap();

    assert_eq!(
        detail.detail_images,
        vec![
            "https://example.com/full/one.jpg".to_string(),
            "https://example.com/full/three.jpg".to_string(),
        ]
    );
}

#[test]
fn detail_joins_nonempty_paragraphs() {
    let detail = extract_detail(&detail_page(), &summary(), 0, 50).unwrap();
    assert_eq!(detail.description, "First paragraph. Second paragraph.");
}

#[test]
fn detail_skips_malformed_spec_rows() {
    let detail = extract_detail(&detail_page(), &summary(), 0, 50).unwrap();

    assert_eq!(
        detail.specifications,
        vec![
            ("Length".to_string(), "19ft 6in".to_string()),
            ("ATM".to_string(), "2800kg".to_string()),
        ]
    );
}

#[test]
fn detail_on_blank_page_downgrades_to_sentinels() {
    let detail = extract_detail("<html><body></body></html>", &summary(), 0, 50).unwrap();

    assert_eq!(detail.was_price, "N/A");
    assert_eq!(detail.now_price, "N/A");
    assert_eq!(detail.status, "N/A");
    assert!(detail.detail_images.is_empty());
    assert!(detail.specifications.is_empty());
    assert_eq!(detail.description, "");
    // No "new" in the sentinel status: condition letter falls back to used.
    assert_eq!(detail.sku, "CFS-U-0050");
    // Summary fields carry over untouched.
    assert_eq!(detail.title, "Caravan 0");
    assert_eq!(detail.listing_url, "https://example.com/listing/0/");
}
