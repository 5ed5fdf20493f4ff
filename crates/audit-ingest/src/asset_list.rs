use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, info};

use audit_model::{Asset, AssetId, UNKNOWN_ASSET_NAME};

use crate::error::{IngestError, Result};
use crate::header::{ColumnLayout, is_header_row};

/// Prefix of the barcode given to rows without one. The 1-based row number follows.
pub const MISSING_BARCODE_PREFIX: &str = "NO-BARCODE-";

/// Reads an asset list file (UTF-8, BOM optional).
pub fn read_asset_list(path: &Path) -> Result<Vec<Asset>> {
    let bytes = fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| IngestError::Encoding {
        path: path.to_path_buf(),
    })?;
    let assets = parse_asset_list(&text)?;
    info!(path = %path.display(), assets = assets.len(), "asset list loaded");
    Ok(assets)
}

/// Parses delimited text into pending asset records.
///
/// Records may end in `\r\n`, `\n` or `\r`, and quoted fields may span
/// lines. Blank lines are dropped and a leading header line is recognised by
/// its column labels. Without a usable header the columns are name, barcode,
/// location and serial number. Returns [`IngestError::NoRows`] when nothing
/// but a header remains.
pub fn parse_asset_list(text: &str) -> Result<Vec<Asset>> {
    let text = text.trim_start_matches('\u{feff}');
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            line: source.position().map_or(0, |pos| pos.line() as usize),
            source,
        })?;
        if is_blank(&record) {
            continue;
        }
        rows.push(record.iter().map(normalize_cell).collect::<Vec<_>>());
    }

    let (layout, data) = match rows.split_first() {
        Some((first, rest)) if is_header_row(first) => {
            debug!(header = ?first, "header row detected");
            (ColumnLayout::from_header(first), rest)
        }
        _ => (ColumnLayout::default(), rows.as_slice()),
    };
    if data.is_empty() {
        return Err(IngestError::NoRows);
    }

    Ok(data
        .iter()
        .enumerate()
        .map(|(idx, row)| build_asset(idx, row, layout))
        .collect())
}

/// A whitespace-only line reads as a single blank field.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(|field| field.trim().is_empty())
}

/// Trims a field. A quoted value padded with spaces (`  "PR-505" `) is not
/// unquoted by the reader, so it is unquoted here.
fn normalize_cell(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.len() != raw.len()
        && let Some(inner) = trimmed
            .strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
    {
        return inner.replace("\"\"", "\"").trim().to_string();
    }
    trimmed.to_string()
}

fn field(row: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|idx| row.get(idx))
        .filter(|value| !value.is_empty())
        .cloned()
}

fn build_asset(idx: usize, row: &[String], layout: ColumnLayout) -> Asset {
    let name = field(row, layout.name).unwrap_or_else(|| UNKNOWN_ASSET_NAME.to_string());
    let barcode = field(row, layout.barcode)
        .unwrap_or_else(|| format!("{MISSING_BARCODE_PREFIX}{}", idx + 1));
    Asset::pending(AssetId::for_import(idx), name, barcode)
        .with_location(field(row, layout.location))
        .with_serial_number(field(row, layout.serial_number))
}
