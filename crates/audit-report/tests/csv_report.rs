//! Integration tests for report export.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

use audit_ingest::parse_asset_list;
use audit_model::{Asset, AssetId};
use audit_report::{UTF8_BOM, export_report, render_report, report_file_name};

fn at(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn shanghai() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("valid offset")
}

fn audited_assets() -> Vec<Asset> {
    let mut chair = Asset::pending(AssetId::from("import-0"), "办公椅", "CH-001")
        .with_location(Some("101室".to_string()));
    chair.mark_found(at("2025-03-01T06:30:05Z"), None, None);
    let board = Asset::pending(AssetId::from("import-1"), "白板", "WB-606")
        .with_location(Some("会议室A".to_string()));
    let mut extra = Asset::extra("XX-999");
    extra.notes = Some("走廊".to_string());
    extra.scan_timestamp = Some(at("2025-03-01T06:31:00Z"));
    vec![chair, board, extra]
}

fn report_text(assets: &[Asset]) -> String {
    let bytes = render_report(assets, &shanghai()).expect("render report");
    assert!(bytes.starts_with(UTF8_BOM));
    String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).expect("utf-8 report")
}

#[test]
fn report_quotes_every_field_and_labels_status() {
    insta::assert_snapshot!(report_text(&audited_assets()), @r#"
    "资产名称","条码","状态","位置","备注","时间戳"
    "办公椅","CH-001","已盘点","101室","","2025/3/1 14:30:05"
    "白板","WB-606","未盘点","会议室A","",""
    "新物品","XX-999","新增","","走廊","2025/3/1 14:31:00"
    "#);
}

#[test]
fn embedded_quotes_and_commas_survive() {
    let asset = Asset::pending(AssetId::from("import-0"), "Desk, \"standing\"", "DK-404");
    let text = report_text(&[asset]);
    assert!(text.contains(r#""Desk, ""standing""","DK-404""#));
}

#[test]
fn export_then_import_preserves_name_barcode_location() {
    let assets = audited_assets();
    let text = report_text(&assets);
    let reimported = parse_asset_list(&text).expect("re-import report");
    assert_eq!(reimported.len(), assets.len());
    for (original, round) in assets.iter().zip(&reimported) {
        assert_eq!(round.name, original.name);
        assert_eq!(round.barcode, original.barcode);
        assert_eq!(round.location, original.location);
    }
}

#[test]
fn file_name_embeds_export_date() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 1).expect("valid date");
    assert_eq!(report_file_name(date), "inventory_export_2025-03-01.csv");
}

#[test]
fn export_writes_bom_prefixed_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output_dir = dir.path().join("reports");
    let exported_at = shanghai()
        .with_ymd_and_hms(2025, 3, 2, 0, 15, 0)
        .single()
        .expect("valid local time");
    let path = export_report(&output_dir, &audited_assets(), &exported_at).expect("export");
    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("inventory_export_2025-03-02.csv")
    );
    let bytes = std::fs::read(&path).expect("read report");
    assert!(bytes.starts_with(UTF8_BOM));
    let text = String::from_utf8(bytes).expect("utf-8 report");
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn multi_line_notes_and_inch_marks_survive_reimport() {
    let mut monitor = Asset::pending(AssetId::from("import-0"), "Monitor 27\"", "MN-027")
        .with_location(Some("101室".to_string()));
    monitor.mark_found(
        at("2025-03-01T06:30:05Z"),
        None,
        Some("leg loose\nsecond line".to_string()),
    );
    let desk = Asset::pending(AssetId::from("import-1"), "Desk", "DK-404");

    let text = report_text(&[monitor, desk]);
    assert!(text.contains(r#""Monitor 27""","MN-027""#));
    let reimported = parse_asset_list(&text).expect("re-import report");
    assert_eq!(reimported.len(), 2);
    assert_eq!(reimported[0].name, "Monitor 27\"");
    assert_eq!(reimported[0].barcode, "MN-027");
    assert_eq!(reimported[0].location.as_deref(), Some("101室"));
    assert_eq!(reimported[1].name, "Desk");
    assert_eq!(reimported[1].barcode, "DK-404");
}
