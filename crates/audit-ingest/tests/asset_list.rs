//! Integration tests for asset list ingestion.

use std::collections::HashSet;
use std::fs;

use proptest::prelude::*;

use audit_ingest::{IngestError, parse_asset_list, read_asset_list};
use audit_model::AssetStatus;

const SAMPLE_CSV: &str = "Name,Barcode,Location,Serial
办公椅,CH-001,101室,SN8833
戴尔显示器,MN-202,101室,DELL-999
苹果笔记本 Pro,LT-303,102室,MBP-2023
升降办公桌,DK-404,102室,ST-555
投影仪,PR-505,会议室A,EPSON-777
白板,WB-606,会议室A,WB-001";

#[test]
fn reads_sample_list_in_order() {
    let assets = parse_asset_list(SAMPLE_CSV).expect("parse sample");
    let barcodes: Vec<&str> = assets.iter().map(|a| a.barcode.as_str()).collect();
    assert_eq!(
        barcodes,
        vec!["CH-001", "MN-202", "LT-303", "DK-404", "PR-505", "WB-606"]
    );
    assert!(assets.iter().all(|a| a.status == AssetStatus::Pending));
    let ids: HashSet<_> = assets.iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids.len(), assets.len());
}

#[test]
fn accepts_any_newline_convention() {
    let text = "Name,Barcode\r\nChair,CH-001\r\n\r\nDesk,DK-404\rLamp,LP-1\n";
    let assets = parse_asset_list(text).expect("parse mixed newlines");
    assert_eq!(assets.len(), 3);
    assert_eq!(assets[2].name, "Lamp");
}

#[test]
fn list_without_header_uses_fixed_columns() {
    let assets = parse_asset_list("Chair,CH-001,Room 1,SN-1").expect("parse");
    assert_eq!(assets.len(), 1);
    assert_eq!(assets[0].name, "Chair");
    assert_eq!(assets[0].serial_number.as_deref(), Some("SN-1"));
}

#[test]
fn duplicate_barcodes_are_kept() {
    let assets = parse_asset_list("Chair,CH-001\nChair,CH-001").expect("parse");
    assert_eq!(assets.len(), 2);
    assert_ne!(assets[0].id, assets[1].id);
}

#[test]
fn quoted_commas_stay_inside_the_field() {
    let assets = parse_asset_list("\"Desk, standing\",DK-404,Room 2").expect("parse");
    assert_eq!(assets[0].name, "Desk, standing");
    assert_eq!(assets[0].barcode, "DK-404");
}

#[test]
fn quoted_fields_may_span_lines() {
    let text = "Chair,CH-001,\"Room 1\nwest wing\"\r\nDesk,DK-404\n";
    let assets = parse_asset_list(text).expect("parse");
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].location.as_deref(), Some("Room 1\nwest wing"));
    assert_eq!(assets[1].barcode, "DK-404");
}

#[test]
fn reads_file_with_byte_order_mark() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("assets.csv");
    fs::write(&path, format!("\u{feff}{SAMPLE_CSV}")).expect("write file");
    let assets = read_asset_list(&path).expect("read file");
    assert_eq!(assets.len(), 6);
    assert_eq!(assets[0].name, "办公椅");
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.csv");
    match read_asset_list(&path) {
        Err(IngestError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn invalid_utf8_is_rejected() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("latin1.csv");
    fs::write(&path, [0x43u8, 0x68, 0xe9, 0x2c, 0x31]).expect("write file");
    assert!(matches!(
        read_asset_list(&path),
        Err(IngestError::Encoding { .. })
    ));
}

fn data_line() -> impl Strategy<Value = String> {
    (
        "[a-h]{1,8}",
        "[A-Z]{2}-[0-9]{3}",
        proptest::option::of("[0-9]{3}"),
    )
        .prop_map(|(name, barcode, room)| match room {
            Some(room) => format!("{name},{barcode},{room}"),
            None => format!("{name},{barcode}"),
        })
}

proptest! {
    #[test]
    fn record_count_matches_non_blank_data_rows(
        lines in proptest::collection::vec(data_line(), 1..30),
        blanks in proptest::collection::vec(0usize..3, 1..30),
        with_header in any::<bool>(),
    ) {
        let mut text = String::new();
        if with_header {
            text.push_str("Name,Barcode,Location\n");
        }
        for (idx, line) in lines.iter().enumerate() {
            text.push_str(line);
            text.push('\n');
            for _ in 0..blanks[idx % blanks.len()] {
                text.push_str("  \n");
            }
        }
        let assets = parse_asset_list(&text).expect("parse generated list");
        prop_assert_eq!(assets.len(), lines.len());
        prop_assert!(assets.iter().all(|a| a.status == AssetStatus::Pending));
    }
}
