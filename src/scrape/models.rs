/// One card from the listing index page, paired up positionally from the
/// four element collections the page exposes.
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub title: String,
    pub price: String,
    pub url: String,
    pub image: String,
}

/// Everything known about one listing after its detail page has been
/// visited. Fixed fields first; the open-ended spec-table pairs stay in
/// their own list so they can never shadow a fixed field.
#[derive(Debug, Clone)]
pub struct ListingDetail {
    pub sku: String,
    pub title: String,
    pub list_price: String,
    pub listing_url: String,
    pub listing_image: String,
    pub was_price: String,
    pub now_price: String,
    pub status: String,
    pub description: String,
    pub detail_images: Vec<String>,
    /// Label/value rows from the specification table, in page order.
    pub specifications: Vec<(String, String)>,
}
