use chrono::{DateTime, Local};
use rust_xlsxwriter::Workbook;

use crate::errors::ScrapeError;
use crate::scrape::ListingDetail;

/// Fixed columns, in export order. Specification columns follow these.
const FIXED_HEADERS: &[&str] = &[
    "SKU CODE",
    "title",
    "list_price",
    "listing_url",
    "listing_image",
    "was_price",
    "now_price",
    "status",
    "description",
    "detail_images",
];

/// Writes all collected records into a new timestamp-named worksheet and
/// saves the workbook at `path`. Returns the worksheet name.
pub fn export_records(records: &[ListingDetail], path: &str) -> Result<String, ScrapeError> {
    let title = sheet_title(&Local::now());
    write_workbook(records, path, &title)?;
    Ok(title)
}

/// Worksheet names may not contain `/` or `:` and cap at 31 characters,
/// so the timestamp uses `-` and `.` separators.
pub fn sheet_title(now: &DateTime<Local>) -> String {
    format!("SCRAPPED DATA {}", now.format("%d-%m-%Y %H.%M"))
}

/// Union of specification keys across all records, in first-seen order.
/// Heterogeneous spec tables get one column per distinct label instead
/// of misaligning rows; when every record carries the same keys this is
/// just the first record's key order.
pub fn specification_headers(records: &[ListingDetail]) -> Vec<String> {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        for (key, _) in &record.specifications {
            if !headers.iter().any(|h| h == key) {
                headers.push(key.clone());
            }
        }
    }
    headers
}

pub fn write_workbook(
    records: &[ListingDetail],
    path: &str,
    title: &str,
) -> Result<(), ScrapeError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(title)
        .map_err(|e| ScrapeError::Xlsx(format!("Failed to name worksheet '{title}': {e}")))?;

    let spec_headers = specification_headers(records);

    // Header row
    let mut col: u16 = 0;
    for header in FIXED_HEADERS
        .iter()
        .copied()
        .chain(spec_headers.iter().map(String::as_str))
    {
        worksheet
            .write_string(0, col, header)
            .map_err(|e| ScrapeError::Xlsx(format!("Failed to write header '{header}': {e}")))?;
        col += 1;
    }

    // Rows
    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        let detail_images = record.detail_images.join(", ");

        let fixed = [
            record.sku.as_str(),
            record.title.as_str(),
            record.list_price.as_str(),
            record.listing_url.as_str(),
            record.listing_image.as_str(),
            record.was_price.as_str(),
            record.now_price.as_str(),
            record.status.as_str(),
            record.description.as_str(),
            detail_images.as_str(),
        ];

        let mut col: u16 = 0;
        for value in fixed {
            worksheet
                .write_string(row, col, value)
                .map_err(|e| ScrapeError::Xlsx(format!("Failed to write row {row}: {e}")))?;
            col += 1;
        }

        for key in &spec_headers {
            let value = record
                .specifications
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.as_str())
                .unwrap_or("");
            worksheet
                .write_string(row, col, value)
                .map_err(|e| ScrapeError::Xlsx(format!("Failed to write row {row}: {e}")))?;
            col += 1;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ScrapeError::Xlsx(format!("Failed to save workbook: {e}")))?;

    Ok(())
}
