//! The interactive audit loop.
//!
//! Reads one line at a time, turns it into a [`ReplCommand`] and applies it
//! to the session. Session errors are printed and the loop carries on; only
//! failures to read input or write output end it early.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use audit_core::{
    AuditSession, Clock, DecoderFeed, Evidence, ScanOutcome, ScanSource, StageKind, StagedAsset,
};
use audit_model::{AssetId, AssetStatus, InventoryStats};

use crate::logging::redact_value;
use crate::photo::photo_data_uri;
use crate::repl::{HELP_TEXT, ReplCommand, parse_line};
use crate::tables::{asset_table, stats_table};

/// Runs the loop until `finish` or end of input, then finishes the audit.
///
/// The session must be at the audit step.
pub fn run_interactive<C, R, W>(
    session: &mut AuditSession<C>,
    feed: &mut dyn DecoderFeed,
    input: R,
    out: &mut W,
) -> Result<InventoryStats>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    let mut evidence = Evidence::default();
    writeln!(out, "{} assets loaded. Type `help` for commands.", session.assets().len())?;
    for line in input.lines() {
        let line = line.context("read input")?;
        let command = parse_line(&line);
        if command == ReplCommand::Finish {
            break;
        }
        apply_command(session, feed, &mut evidence, command, out)?;
    }
    session.stop_scanner(feed);
    let stats = session.finish_audit().context("finish audit")?;
    writeln!(out, "Audit finished.")?;
    writeln!(out, "{}", stats_table(&stats))?;
    Ok(stats)
}

fn apply_command<C: Clock, W: Write>(
    session: &mut AuditSession<C>,
    feed: &mut dyn DecoderFeed,
    evidence: &mut Evidence,
    command: ReplCommand,
    out: &mut W,
) -> Result<()> {
    match command {
        ReplCommand::Scan(code) => handle_scan(session, &code, ScanSource::Camera, out)?,
        ReplCommand::Manual(code) => handle_scan(session, &code, ScanSource::Manual, out)?,
        ReplCommand::Note(text) => {
            if session.staged().is_none() {
                writeln!(out, "Nothing awaiting confirmation.")?;
            } else {
                debug!(notes = redact_value(&text), "notes entered");
                evidence.notes = Some(text);
                writeln!(out, "Notes set.")?;
            }
        }
        ReplCommand::Photo(path) => {
            if session.staged().is_none() {
                writeln!(out, "Nothing awaiting confirmation.")?;
            } else {
                match photo_data_uri(&path) {
                    Ok(uri) => {
                        evidence.photo_url = Some(uri);
                        writeln!(out, "Photo attached.")?;
                    }
                    Err(error) => writeln!(out, "error: {error:#}")?,
                }
            }
        }
        ReplCommand::Confirm => {
            let supplied = std::mem::take(evidence);
            match session.confirm(Evidence::new(supplied.photo_url, supplied.notes)) {
                Ok(asset) => writeln!(
                    out,
                    "Confirmed: {} [{}] {}",
                    asset.name,
                    asset.barcode,
                    asset.status.label()
                )?,
                Err(error) => writeln!(out, "error: {error}")?,
            }
        }
        ReplCommand::Cancel => {
            *evidence = Evidence::default();
            if session.cancel() {
                writeln!(out, "Cancelled.")?;
            } else {
                writeln!(out, "Nothing awaiting confirmation.")?;
            }
        }
        ReplCommand::Open(target) => match resolve_target(session, &target, false) {
            Some(id) => match session.open(&id) {
                Ok(staged) => {
                    *evidence = Evidence::default();
                    print_staged(out, staged)?;
                }
                Err(error) => writeln!(out, "error: {error}")?,
            },
            None => writeln!(out, "No record matches {target}.")?,
        },
        ReplCommand::Delete(target) => match resolve_target(session, &target, true)
            .or_else(|| resolve_target(session, &target, false))
        {
            Some(id) => match session.delete_extra(&id) {
                Ok(true) => writeln!(out, "Deleted.")?,
                Ok(false) => writeln!(out, "Only extra records can be deleted.")?,
                Err(error) => writeln!(out, "error: {error}")?,
            },
            None => writeln!(out, "No record matches {target}.")?,
        },
        ReplCommand::List(filter) => {
            let count = session.filtered(filter).count();
            writeln!(out, "{}", asset_table(session.filtered(filter)))?;
            writeln!(out, "{}: {count}", filter.label())?;
        }
        ReplCommand::Stats => writeln!(out, "{}", stats_table(&session.stats()))?,
        ReplCommand::Start => match session.start_scanner(feed) {
            Ok(()) => writeln!(out, "Scanner on.")?,
            Err(error) => {
                warn!(%error, "scanner unavailable");
                writeln!(out, "error: {error}")?;
            }
        },
        ReplCommand::Stop => {
            session.stop_scanner(feed);
            writeln!(out, "Scanner off.")?;
        }
        ReplCommand::Help => writeln!(out, "{HELP_TEXT}")?,
        ReplCommand::Invalid(usage) => writeln!(out, "usage: {usage}")?,
        ReplCommand::Blank | ReplCommand::Finish => {}
    }
    Ok(())
}

fn handle_scan<C: Clock, W: Write>(
    session: &mut AuditSession<C>,
    code: &str,
    source: ScanSource,
    out: &mut W,
) -> Result<()> {
    debug!(code = redact_value(code), source = source.as_str(), "code received");
    match session.scan(code, source) {
        Ok(ScanOutcome::Staged(_)) => {
            if let Some(staged) = session.staged() {
                print_staged(out, staged)?;
            }
        }
        Ok(ScanOutcome::AlreadyScanned(id)) => {
            let name = session.asset(&id).map_or("", |asset| asset.name.as_str());
            writeln!(out, "Already scanned: {name} [{code}]")?;
        }
        Ok(ScanOutcome::Debounced) => writeln!(out, "Repeat scan ignored.")?,
        Ok(ScanOutcome::AwaitingConfirmation) => {
            writeln!(out, "Confirm or cancel the current item first.")?;
        }
        Ok(ScanOutcome::ScannerOff) => {
            writeln!(out, "Scanner is off. Use `start` or `manual <CODE>`.")?;
        }
        Ok(ScanOutcome::Empty) => {}
        Err(error) => writeln!(out, "error: {error}")?,
    }
    Ok(())
}

fn print_staged<W: Write>(out: &mut W, staged: &StagedAsset) -> Result<()> {
    let asset = &staged.asset;
    let heading = match staged.kind {
        StageKind::Match => "Match",
        StageKind::NewExtra => "Not on the list",
        StageKind::Review => "Review",
    };
    writeln!(
        out,
        "{heading}: {} [{}] at {} ({})",
        asset.name,
        asset.barcode,
        asset.location_or_unknown(),
        asset.status.label()
    )?;
    writeln!(out, "Add `note`/`photo`, then `confirm` or `cancel`.")?;
    Ok(())
}

/// Finds a record by id, falling back to the first record with that barcode.
///
/// With `extra_only` the barcode fallback only considers extra records.
fn resolve_target<C: Clock>(
    session: &AuditSession<C>,
    target: &str,
    extra_only: bool,
) -> Option<AssetId> {
    let id = AssetId::from(target);
    if session.asset(&id).is_some() {
        return Some(id);
    }
    let target = target.trim();
    session
        .assets()
        .iter()
        .find(|asset| {
            asset.barcode == target && (!extra_only || asset.status == AssetStatus::Extra)
        })
        .map(|asset| asset.id.clone())
}

