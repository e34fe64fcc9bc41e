// src/pool.rs

use std::sync::Mutex;
use std::thread;

use crate::errors::ScrapeError;
use crate::scrape::{fetch_detail, ListingDetail, ListingSummary};

/// Width of the detail-fetch pool. Each worker owns one browser session
/// at a time, so this is also the ceiling on live browser processes
/// during the fan-out stage.
pub const WORKERS: usize = 3;

/// Fetches every listing's detail page with the bounded pool and returns
/// the finished records in input order.
pub fn fetch_all_details(listings: Vec<ListingSummary>, start_num: u32) -> Vec<ListingDetail> {
    run_pool(listings, WORKERS, move |summary, index| {
        fetch_detail(summary, index, start_num)
    })
}

/// Fans `fetch` out over up to `workers` threads. The collector is one
/// mutex-guarded list of `(index, record)` pairs; appends are the only
/// operation under the lock. All workers are joined before returning,
/// per-listing failures are logged with the listing URL and skipped, and
/// the result is sorted by enumeration index so the aggregate order does
/// not depend on which worker finished first.
pub(crate) fn run_pool<F>(
    listings: Vec<ListingSummary>,
    workers: usize,
    fetch: F,
) -> Vec<ListingDetail>
where
    F: Fn(&ListingSummary, usize) -> Result<ListingDetail, ScrapeError> + Sync,
{
    if listings.is_empty() {
        return Vec::new();
    }

    let indexed: Vec<(usize, ListingSummary)> = listings.into_iter().enumerate().collect();
    let chunk_size = indexed.len().div_ceil(workers.max(1));
    let collected: Mutex<Vec<(usize, ListingDetail)>> =
        Mutex::new(Vec::with_capacity(indexed.len()));

    thread::scope(|scope| {
        let fetch = &fetch;
        let collected = &collected;

        for chunk in indexed.chunks(chunk_size) {
            scope.spawn(move || {
                for (index, summary) in chunk {
                    match fetch(summary, *index) {
                        Ok(detail) => collected.lock().unwrap().push((*index, detail)),
                        Err(e) => eprintln!("⚠️ Listing {} failed: {e}", summary.url),
                    }
                }
            });
        }
    });

    let mut records = collected.into_inner().unwrap();
    records.sort_by_key(|(index, _)| *index);
    records.into_iter().map(|(_, detail)| detail).collect()
}
