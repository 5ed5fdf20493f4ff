//! Audit report export.
//!
//! The report is CSV with a UTF-8 byte-order mark so spreadsheet tools pick
//! the right encoding for non-ASCII names and locations.

mod csv_report;
mod error;

pub use csv_report::{
    REPORT_FILE_PREFIX, REPORT_HEADERS, UTF8_BOM, export_report, format_timestamp, render_report,
    report_file_name, write_report,
};
pub use error::{ReportError, Result};
