use std::ffi::OsStr;

use headless_chrome::{Browser, LaunchOptions};

use crate::errors::ScrapeError;

/// Flags the listing site's bot checks look for. The blink feature flag
/// keeps `navigator.webdriver` from giving the session away.
const BROWSER_ARGS: &[&str] = &[
    "--disable-blink-features=AutomationControlled",
    "--start-maximized",
];

const WINDOW_SIZE: (u32, u32) = (1920, 1080);

/// Launches one browser process and hands back the automation handle.
/// Called once for the index page and once per detail fetch, so the
/// caller is responsible for dropping the handle as soon as it is done.
pub fn launch() -> Result<Browser, ScrapeError> {
    let args = BROWSER_ARGS.iter().map(OsStr::new).collect();

    Browser::new(LaunchOptions {
        headless: true,
        window_size: Some(WINDOW_SIZE),
        args,
        ..Default::default()
    })
    .map_err(|e| ScrapeError::Browser(e.to_string()))
}
