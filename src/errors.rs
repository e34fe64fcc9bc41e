// errors.rs
use std::fmt;

/// Errors originating from the browser layer, extraction, or the
/// spreadsheet export. Per-field extraction misses are not errors —
/// they downgrade to sentinels inside the extractors. These variants
/// cover failures that genuinely stop a stage.
#[derive(Debug)]
pub enum ScrapeError {
    Browser(String),
    Navigation(String),
    Eval(String),
    Selector(String),
    Xlsx(String),
    BadInput(String),
    Io(String),
}

impl fmt::Display for ScrapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScrapeError::Browser(msg) => write!(f, "Browser error: {msg}"),
            ScrapeError::Navigation(msg) => write!(f, "Navigation error: {msg}"),
            ScrapeError::Eval(msg) => write!(f, "Page script error: {msg}"),
            ScrapeError::Selector(msg) => write!(f, "Bad selector: {msg}"),
            ScrapeError::Xlsx(msg) => write!(f, "Spreadsheet error: {msg}"),
            ScrapeError::BadInput(msg) => write!(f, "Bad input: {msg}"),
            ScrapeError::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for ScrapeError {}
