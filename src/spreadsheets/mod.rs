pub mod export_xlsx;

pub use export_xlsx::{export_records, sheet_title, specification_headers, write_workbook};
