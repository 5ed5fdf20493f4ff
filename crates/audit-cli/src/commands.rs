use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use tracing::{info, info_span};

use audit_cli::batch::replay_scans;
use audit_cli::feed::{ScanFileFeed, WedgeFeed};
use audit_cli::interactive::run_interactive;
use audit_cli::tables::asset_table;
use audit_core::{AuditSession, Clock, ManualClock, SessionOptions};
use audit_ingest::read_asset_list;
use audit_model::Asset;
use audit_report::export_report;
use audit_summary::generate_report;

use crate::cli::{AuditArgs, InspectArgs, ReconcileArgs, SummaryArgs};
use crate::types::AuditResult;

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", list = %args.asset_list.display());
    let _guard = span.enter();
    let assets = import(&args.asset_list)?;
    println!("{}", asset_table(&assets));
    println!("{} assets", assets.len());
    Ok(())
}

pub fn run_audit(args: &AuditArgs) -> Result<AuditResult> {
    let span = info_span!("audit", list = %args.asset_list.display());
    let _guard = span.enter();
    let mut session = AuditSession::new();
    session
        .load_assets(import(&args.asset_list)?)
        .context("start audit")?;
    let mut feed = WedgeFeed::default();
    if let Err(error) = session.start_scanner(&mut feed) {
        eprintln!("warning: {error}");
    }
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_interactive(&mut session, &mut feed, stdin.lock(), &mut stdout.lock())?;
    complete_audit(&mut session, args.output_dir.as_deref(), &args.summary)
}

pub fn run_reconcile(args: &ReconcileArgs) -> Result<AuditResult> {
    let span = info_span!("reconcile", list = %args.asset_list.display());
    let _guard = span.enter();
    let clock = ManualClock::new(Utc::now());
    let mut session = AuditSession::with_clock(&clock, SessionOptions::default());
    session
        .load_assets(import(&args.asset_list)?)
        .context("start audit")?;
    let mut feed = ScanFileFeed::new(&args.scans);
    session
        .start_scanner(&mut feed)
        .context("open scan file")?;
    let events = feed.take_events();
    let replay = replay_scans(&mut session, &clock, &events).context("replay scans")?;
    session.stop_scanner(&mut feed);
    session.finish_audit().context("finish audit")?;
    info!(
        scans = events.len(),
        matched = replay.matched,
        extra = replay.extra,
        "scans replayed"
    );
    let mut result = complete_audit(&mut session, args.output_dir.as_deref(), &args.summary)?;
    result.replay = Some(replay);
    Ok(result)
}

fn import(path: &Path) -> Result<Vec<Asset>> {
    read_asset_list(path).with_context(|| format!("import {}", path.display()))
}

/// Exports the report for a finished session and generates the summary when asked.
fn complete_audit<C: Clock>(
    session: &mut AuditSession<C>,
    output_dir: Option<&Path>,
    summary: &SummaryArgs,
) -> Result<AuditResult> {
    let output_dir = output_dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
    let report_path = export_report(&output_dir, session.assets(), &Local::now())
        .context("export report")?;
    if summary.enabled {
        let text = generate_report(&summary.settings(), session.assets());
        session.record_summary(text);
    }
    Ok(AuditResult {
        report_path,
        stats: session.stats(),
        summary: session.summary().map(str::to_string),
        replay: None,
    })
}
