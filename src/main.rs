use std::io::Write;

use crate::browser::{ScrollSettings, TabSurface};
use crate::errors::ScrapeError;

mod browser;
mod domain;
mod errors;
mod pool;
mod scrape;
mod spreadsheets;

#[cfg(test)]
mod tests;

const SOURCE_URL: &str = "https://gccaravans.com.au/caravans-for-sale/";
const OUTPUT_PATH: &str = "scraped_listings.xlsx";

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Scrape failed: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScrapeError> {
    let start_num = prompt_start_number()?;

    let session = browser::launch()?;
    let tab = session
        .new_tab()
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;
    tab.navigate_to(SOURCE_URL)
        .map_err(|e| ScrapeError::Navigation(e.to_string()))?;
    tab.wait_until_navigated()
        .map_err(|e| ScrapeError::Navigation(e.to_string()))?;

    println!("Scrolling to load all listings...");
    let surface = TabSurface::new(tab.clone(), scrape::selectors::TITLES);
    browser::scroll_until_idle(&surface, &ScrollSettings::default())?;

    println!("Getting listing data...");
    let html = tab
        .get_content()
        .map_err(|e| ScrapeError::Browser(e.to_string()))?;
    let listings = scrape::extract_summaries(&html)?;
    drop(session);

    println!(
        "Found {} listings. Scraping with {} workers...\n",
        listings.len(),
        pool::WORKERS
    );
    let records = pool::fetch_all_details(listings, start_num);

    let sheet = spreadsheets::export_records(&records, OUTPUT_PATH)?;
    println!("✅ Data saved to {OUTPUT_PATH} → New tab: {sheet}");

    Ok(())
}

/// One interactive prompt for the SKU numbering offset. Non-numeric
/// input fails the whole run before any browser is launched.
fn prompt_start_number() -> Result<u32, ScrapeError> {
    print!("Enter starting SKU number (e.g., 50): ");
    std::io::stdout()
        .flush()
        .map_err(|e| ScrapeError::Io(e.to_string()))?;

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .map_err(|e| ScrapeError::Io(e.to_string()))?;

    line.trim()
        .parse::<u32>()
        .map_err(|_| ScrapeError::BadInput(format!("not a number: {:?}", line.trim())))
}
