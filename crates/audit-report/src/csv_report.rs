use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use audit_model::Asset;

use crate::error::{ReportError, Result};

/// Column headers: name, barcode, status, location, notes, timestamp.
pub const REPORT_HEADERS: [&str; 6] = ["资产名称", "条码", "状态", "位置", "备注", "时间戳"];

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const REPORT_FILE_PREFIX: &str = "inventory_export";

/// Renders a scan time as `YYYY/M/D HH:MM:SS` in the given zone.
pub fn format_timestamp<Tz>(timestamp: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    timestamp
        .with_timezone(tz)
        .format("%Y/%-m/%-d %H:%M:%S")
        .to_string()
}

/// Writes the report (BOM, header, one row per asset) to `writer`.
pub fn write_report<W, Tz>(mut writer: W, assets: &[Asset], tz: &Tz) -> Result<()>
where
    W: Write,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    writer.write_all(UTF8_BOM)?;
    let mut csv = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv.write_record(REPORT_HEADERS)?;
    for asset in assets {
        let timestamp = asset
            .scan_timestamp
            .as_ref()
            .map(|at| format_timestamp(at, tz))
            .unwrap_or_default();
        csv.write_record([
            asset.name.as_str(),
            asset.barcode.as_str(),
            asset.status.label(),
            asset.location.as_deref().unwrap_or(""),
            asset.notes.as_deref().unwrap_or(""),
            timestamp.as_str(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Report bytes held in memory.
pub fn render_report<Tz>(assets: &[Asset], tz: &Tz) -> Result<Vec<u8>>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut buffer = Vec::new();
    write_report(&mut buffer, assets, tz)?;
    Ok(buffer)
}

/// File name embedding the export date, e.g. `inventory_export_2025-03-01.csv`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{REPORT_FILE_PREFIX}_{}.csv", date.format("%Y-%m-%d"))
}

/// Writes the report into `output_dir`, named after the export time.
pub fn export_report<Tz>(
    output_dir: &Path,
    assets: &[Asset],
    exported_at: &DateTime<Tz>,
) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fs::create_dir_all(output_dir).map_err(|source| ReportError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;
    let path = output_dir.join(report_file_name(exported_at.date_naive()));
    let file = File::create(&path).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    write_report(&mut writer, assets, &exported_at.timezone())?;
    writer.flush().map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), rows = assets.len(), "report exported");
    Ok(path)
}
