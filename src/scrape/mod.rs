mod details;
mod dom;
mod listings;
mod models;
pub mod selectors;

pub use details::{extract_detail, fetch_detail};
pub use listings::extract_summaries;
pub use models::{ListingDetail, ListingSummary};
