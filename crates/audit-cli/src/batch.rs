//! Batch reconciliation of recorded scans.

use tracing::debug;

use audit_core::{AuditSession, Clock, Evidence, ManualClock, ScanOutcome, ScanSource, StageKind};

use crate::feed::ScanEvent;
use crate::logging::redact_value;

/// What happened to the replayed scans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayCounts {
    pub matched: usize,
    pub extra: usize,
    pub already_scanned: usize,
    pub debounced: usize,
}

/// Feeds each event through the camera path and confirms every staged record.
///
/// `clock` must be the clock the session was built with; it is moved to each
/// event's time before the scan so debounce and commit times follow the
/// recording.
pub fn replay_scans<C: Clock>(
    session: &mut AuditSession<C>,
    clock: &ManualClock,
    events: &[ScanEvent],
) -> audit_core::Result<ReplayCounts> {
    let mut counts = ReplayCounts::default();
    for event in events {
        if let Some(at) = event.at {
            clock.set(at);
        }
        let outcome = session.scan(&event.code, ScanSource::Camera)?;
        debug!(code = redact_value(&event.code), outcome = ?outcome, "replayed scan");
        match outcome {
            ScanOutcome::Staged(kind) => {
                session.confirm(Evidence::default())?;
                match kind {
                    StageKind::NewExtra => counts.extra += 1,
                    StageKind::Match | StageKind::Review => counts.matched += 1,
                }
            }
            ScanOutcome::AlreadyScanned(_) => counts.already_scanned += 1,
            ScanOutcome::Debounced => counts.debounced += 1,
            ScanOutcome::AwaitingConfirmation | ScanOutcome::ScannerOff | ScanOutcome::Empty => {}
        }
    }
    Ok(counts)
}
