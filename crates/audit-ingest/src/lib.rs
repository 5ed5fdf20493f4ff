//! Asset list ingestion.
//!
//! Turns delimited text into the ordered list of pending [`audit_model::Asset`]
//! records an audit starts from.

pub mod asset_list;
pub mod error;
pub mod header;

pub use asset_list::{MISSING_BARCODE_PREFIX, parse_asset_list, read_asset_list};
pub use error::{IngestError, Result};
pub use header::{ColumnLayout, is_header_row};
