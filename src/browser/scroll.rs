use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use headless_chrome::Tab;

use crate::errors::ScrapeError;

/// Knobs for the scroll-until-idle loop. The defaults mirror the listing
/// site's lazy-load cadence: small nudges to keep the load trigger firing,
/// one bigger jump, then a settle wait before polling for new cards.
#[derive(Debug, Clone)]
pub struct ScrollSettings {
    pub micro_scroll_steps: u32,
    pub micro_scroll_step_px: u32,
    pub micro_scroll_wait: Duration,
    pub big_scroll_px: u32,
    pub wait_after_big_scroll: Duration,
    pub max_idle_loops: u32,
    pub max_wait_for_new: Duration,
    pub poll_interval: Duration,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            micro_scroll_steps: 10,
            micro_scroll_step_px: 50,
            micro_scroll_wait: Duration::from_millis(500),
            big_scroll_px: 300,
            wait_after_big_scroll: Duration::from_secs(2),
            max_idle_loops: 6,
            max_wait_for_new: Duration::from_secs(20),
            poll_interval: Duration::from_millis(500),
        }
    }
}

/// The two page operations the loader needs. A live tab implements this;
/// tests drive the loop with a fake.
pub trait ScrollSurface {
    fn scroll_by(&self, pixels: u32) -> Result<(), ScrapeError>;
    fn item_count(&self) -> Result<usize, ScrapeError>;
}

/// A browser tab plus the selector whose match count signals new content.
pub struct TabSurface {
    tab: Arc<Tab>,
    item_selector: &'static str,
}

impl TabSurface {
    pub fn new(tab: Arc<Tab>, item_selector: &'static str) -> Self {
        Self { tab, item_selector }
    }
}

impl ScrollSurface for TabSurface {
    fn scroll_by(&self, pixels: u32) -> Result<(), ScrapeError> {
        self.tab
            .evaluate(&format!("window.scrollBy(0, {pixels});"), false)
            .map_err(|e| ScrapeError::Eval(e.to_string()))?;
        Ok(())
    }

    fn item_count(&self) -> Result<usize, ScrapeError> {
        // JSON-encode the selector so the quotes inside it survive the JS literal.
        let selector = serde_json::to_string(self.item_selector)
            .map_err(|e| ScrapeError::Eval(e.to_string()))?;

        let result = self
            .tab
            .evaluate(
                &format!("document.querySelectorAll({selector}).length"),
                false,
            )
            .map_err(|e| ScrapeError::Eval(e.to_string()))?;

        let count = result
            .value
            .as_ref()
            .and_then(|v| v.as_u64())
            .ok_or_else(|| ScrapeError::Eval("element count was not a number".into()))?;

        Ok(count as usize)
    }
}

/// Scrolls until the item count stops growing for `max_idle_loops`
/// consecutive rounds. Heuristic, not a guarantee: if the page's load
/// trigger stops firing early, the loop exits with whatever has rendered.
/// Returns the last observed item count.
pub fn scroll_until_idle(
    page: &impl ScrollSurface,
    settings: &ScrollSettings,
) -> Result<usize, ScrapeError> {
    let mut idle_loops = 0;
    let mut prev_count = 0;

    while idle_loops < settings.max_idle_loops {
        for _ in 0..settings.micro_scroll_steps {
            page.scroll_by(settings.micro_scroll_step_px)?;
            thread::sleep(settings.micro_scroll_wait);
        }
        page.scroll_by(settings.big_scroll_px)?;
        thread::sleep(settings.wait_after_big_scroll);

        match wait_for_growth(page, prev_count, settings)? {
            Some(count) => {
                println!("New content loaded: {count} titles found.");
                prev_count = count;
                idle_loops = 0;
            }
            None => {
                idle_loops += 1;
                println!(
                    "No new content loaded. Idle loop {idle_loops} of {}",
                    settings.max_idle_loops
                );
            }
        }
    }

    println!("Reached end of content or max idle loops.");
    Ok(prev_count)
}

/// Polls the item count until it exceeds `prev_count` or the deadline
/// passes. `Ok(None)` means the deadline hit first.
fn wait_for_growth(
    page: &impl ScrollSurface,
    prev_count: usize,
    settings: &ScrollSettings,
) -> Result<Option<usize>, ScrapeError> {
    let deadline = Instant::now() + settings.max_wait_for_new;

    loop {
        let count = page.item_count()?;
        if count > prev_count {
            return Ok(Some(count));
        }
        if Instant::now() >= deadline {
            return Ok(None);
        }
        thread::sleep(settings.poll_interval);
    }
}
