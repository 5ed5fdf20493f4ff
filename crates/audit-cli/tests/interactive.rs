//! Integration tests for the interactive audit loop.

use std::fs;
use std::io::Cursor;

use chrono::{DateTime, Utc};

use audit_cli::feed::WedgeFeed;
use audit_cli::interactive::run_interactive;
use audit_core::{AuditSession, ManualClock, SessionOptions};
use audit_ingest::parse_asset_list;
use audit_model::{AssetStatus, AuditStep};

const LIST: &str = "办公椅,CH-001,101室,SN8833\n显示器,MN-002,102室,SN9921\n";

fn start() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-03-01T06:30:00Z")
        .unwrap()
        .to_utc()
}

fn run<'c>(clock: &'c ManualClock, script: &str) -> (AuditSession<&'c ManualClock>, String) {
    let mut session = AuditSession::with_clock(clock, SessionOptions::default());
    session.load_assets(parse_asset_list(LIST).unwrap()).unwrap();
    let mut feed = WedgeFeed::default();
    session.start_scanner(&mut feed).unwrap();
    let mut out = Vec::new();
    run_interactive(&mut session, &mut feed, Cursor::new(script), &mut out).unwrap();
    (session, String::from_utf8(out).unwrap())
}

fn transcript(output: &str) -> &str {
    output
        .split("Audit finished.")
        .next()
        .unwrap_or_default()
        .trim_end()
}

#[test]
fn confirm_flow_transcript() {
    let clock = ManualClock::new(start());
    let script = "\
CH-001
CH-001
note 扶手松动
confirm
XX-999
confirm
manual CH-001
delete CH-001
delete XX-999
finish
";
    let (session, output) = run(&clock, script);
    insta::assert_snapshot!(transcript(&output), @r"
    2 assets loaded. Type `help` for commands.
    Match: 办公椅 [CH-001] at 101室 (未盘点)
    Add `note`/`photo`, then `confirm` or `cancel`.
    Confirm or cancel the current item first.
    Notes set.
    Confirmed: 办公椅 [CH-001] 已盘点
    Not on the list: 新物品 [XX-999] at 未知位置 (新增)
    Add `note`/`photo`, then `confirm` or `cancel`.
    Confirmed: 新物品 [XX-999] 新增
    Already scanned: 办公椅 [CH-001]
    Only extra records can be deleted.
    Deleted.
    ");

    assert_eq!(session.step(), AuditStep::Export);
    let chair = &session.assets()[0];
    assert_eq!(chair.status, AssetStatus::Found);
    assert_eq!(chair.notes.as_deref(), Some("扶手松动"));
    assert_eq!(chair.scan_timestamp, Some(start()));
    assert_eq!(session.assets().len(), 2);
}

#[test]
fn end_of_input_finishes_the_audit() {
    let clock = ManualClock::new(start());
    let (session, output) = run(&clock, "MN-002\nconfirm\n");
    assert_eq!(session.step(), AuditStep::Export);
    assert!(output.contains("Audit finished."));
    let stats = session.stats();
    assert_eq!((stats.found, stats.pending, stats.extra), (1, 1, 0));
}

#[test]
fn extra_opened_for_review_survives_delete() {
    let clock = ManualClock::new(start());
    let script = "XX-999\nconfirm\nopen XX-999\ndelete XX-999\nconfirm\n";
    let (session, output) = run(&clock, script);
    assert!(output.contains("awaiting confirmation"));
    assert!(!output.contains("Deleted."));
    assert_eq!(session.assets().len(), 3);
    assert_eq!(session.assets()[2].barcode, "XX-999");
    assert_eq!(session.assets()[2].status, AssetStatus::Extra);
}

#[test]
fn stopped_scanner_only_accepts_manual_codes() {
    let clock = ManualClock::new(start());
    let (session, output) = run(&clock, "stop\nCH-001\nmanual MN-002\nconfirm\n");
    assert!(output.contains("Scanner is off."));
    assert_eq!(session.assets()[0].status, AssetStatus::Pending);
    assert_eq!(session.assets()[1].status, AssetStatus::Found);
}

#[test]
fn cancel_discards_staged_record_and_evidence() {
    let clock = ManualClock::new(start());
    let (session, output) = run(&clock, "CH-001\nnote dusty\ncancel\nopen CH-001\nconfirm\n");
    assert!(output.contains("Cancelled."));
    let chair = &session.assets()[0];
    assert_eq!(chair.status, AssetStatus::Found);
    assert_eq!(chair.notes, None);
}

#[test]
fn photo_is_attached_as_data_uri() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("chair.png");
    fs::write(&photo, [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]).unwrap();
    let clock = ManualClock::new(start());
    let script = format!("CH-001\nphoto {}\nconfirm\n", photo.display());
    let (session, output) = run(&clock, &script);
    assert!(output.contains("Photo attached."));
    let url = session.assets()[0].photo_url.as_deref().unwrap();
    assert!(url.starts_with("data:image/png;base64,"));
}

#[test]
fn unreadable_photo_keeps_record_staged() {
    let clock = ManualClock::new(start());
    let (session, output) = run(&clock, "CH-001\nphoto /nonexistent/chair.png\n");
    assert!(output.contains("error: read photo"));
    assert_eq!(session.assets()[0].status, AssetStatus::Pending);
}

#[test]
fn list_filters_by_status() {
    let clock = ManualClock::new(start());
    let (_, output) = run(&clock, "CH-001\nconfirm\nlist pending\n");
    let listing = transcript(&output);
    assert!(listing.contains("MN-002"));
    assert!(listing.contains("待盘点: 1"));
}
