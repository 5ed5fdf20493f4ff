use chrono::Local;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audit_model::{Asset, AssetStatus, InventoryStats};
use audit_report::format_timestamp;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// Asset records in list order, numbered from 1.
pub fn asset_table<'a>(assets: impl IntoIterator<Item = &'a Asset>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Name"),
        header_cell("Barcode"),
        header_cell("Location"),
        header_cell("Status"),
        header_cell("Notes"),
        header_cell("Photo"),
        header_cell("Scanned"),
        header_cell("ID"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 6, CellAlignment::Center);
    for (index, asset) in assets.into_iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&asset.name),
            Cell::new(&asset.barcode),
            optional_cell(asset.location.as_deref()),
            status_cell(asset.status),
            optional_cell(asset.notes.as_deref()),
            Cell::new(if asset.photo_url.is_some() { "yes" } else { "-" }),
            optional_cell(
                asset
                    .scan_timestamp
                    .map(|timestamp| format_timestamp(&timestamp, &Local))
                    .as_deref(),
            ),
            dim_cell(&asset.id),
        ]);
    }
    table
}

pub fn stats_table(stats: &InventoryStats) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let expected_found = stats.expected() - stats.pending;
    table.add_row(vec![Cell::new("Total"), Cell::new(stats.total)]);
    table.add_row(vec![
        Cell::new("Found"),
        Cell::new(stats.found).fg(Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("Pending"),
        Cell::new(stats.pending).fg(Color::DarkGrey),
    ]);
    table.add_row(vec![
        Cell::new("Extra"),
        Cell::new(stats.extra).fg(Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Progress").add_attribute(Attribute::Bold),
        Cell::new(format!("{}%", stats.progress_percent())).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Expected found"),
        Cell::new(format!(
            "{}% ({expected_found} of {})",
            (stats.expected_completion_rate() * 100.0).round(),
            stats.expected()
        )),
    ]);
    table
}

fn status_cell(status: AssetStatus) -> Cell {
    let color = match status {
        AssetStatus::Found => Color::Green,
        AssetStatus::Extra => Color::Yellow,
        AssetStatus::Pending => Color::DarkGrey,
    };
    Cell::new(status.label()).fg(color)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_model::AssetId;

    #[test]
    fn stats_table_reports_expected_progress() {
        let mut found = Asset::pending(AssetId::from("a-1"), "办公椅", "CH-001");
        found.status = AssetStatus::Found;
        let extra = Asset::extra("XX-999");
        let stats = InventoryStats::from_assets(&[found, extra]);
        let rendered = stats_table(&stats).to_string();
        assert!(rendered.contains("100% (1 of 1)"));
        assert!(rendered.contains("Extra"));
    }

    #[test]
    fn asset_table_shows_placeholders_for_missing_values() {
        let asset = Asset::pending(AssetId::from("a-1"), "Chair", "CH-001");
        let rendered = asset_table([&asset]).to_string();
        assert!(rendered.contains("CH-001"));
        assert!(rendered.contains("未盘点"));
        assert!(rendered.contains("a-1"));
    }
}
