mod prices;
mod sku;

pub use prices::{split_price_pair, SENTINEL};
pub use sku::make_sku;
