//! The external contract with the dealer site's markup. Every selector
//! the scraper depends on lives here; a site redesign breaks this file
//! first.

// Listing index page
pub const TITLES: &str = "h3.elementor-heading-title.elementor-size-default a";
pub const PRICES: &str = "div.jet-listing-dynamic-field__content";
pub const URLS: &str = "a.elementor-button.elementor-button-link.elementor-size-sm";
pub const IMAGES: &str = "img.attachment-medium_large";

// Detail page
pub const DETAIL_PRICES: &str = "div.jet-listing-dynamic-field__content";
pub const CONDITION_BADGE: &str = r#"a[href*="/condition/"] .elementor-button-text"#;
pub const CAROUSEL_LINKS: &str = "div.elementor-image-carousel a[href]";
pub const DESCRIPTION_PARAGRAPHS: &str = "div.elementor-widget-container p";
pub const SPEC_ROWS: &str = "table.jet-table tbody tr";
pub const SPEC_CELLS: &str = "td";
