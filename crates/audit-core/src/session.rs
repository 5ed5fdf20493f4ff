//! The audit session state machine.
//!
//! One [`AuditSession`] value owns the asset list, the workflow step, the
//! record awaiting confirmation and the scan debouncer. Every operation is a
//! synchronous state update; the step decides which operations are allowed.

use chrono::TimeDelta;
use tracing::{debug, info, warn};

use audit_ingest::parse_asset_list;
use audit_model::{
    Asset, AssetFilter, AssetId, AssetStatus, AuditError, AuditStep, InventoryStats,
};

use crate::clock::{Clock, SystemClock};
use crate::debounce::{DEFAULT_DEBOUNCE_WINDOW, ScanDebouncer};
use crate::error::Result;
use crate::reconcile::{ScanDecision, reconcile};
use crate::scanner::{DecoderFeed, ScannerToggle};

/// Tunables for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    pub debounce_window: TimeDelta,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            debounce_window: DEFAULT_DEBOUNCE_WINDOW,
        }
    }
}

/// Where a code came from. Both sources share one reconciliation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanSource {
    Camera,
    Manual,
}

impl ScanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanSource::Camera => "camera",
            ScanSource::Manual => "manual",
        }
    }
}

/// Why a record is waiting for confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    /// A scan matched a pending record.
    Match,
    /// A scan matched nothing; confirming appends a new extra record.
    NewExtra,
    /// The user opened an existing record to attach a photo or notes.
    Review,
}

/// A record held for confirmation, not yet committed to the list.
#[derive(Debug, Clone, PartialEq)]
pub struct StagedAsset {
    pub asset: Asset,
    pub kind: StageKind,
}

/// Optional photo and notes supplied at confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evidence {
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

impl Evidence {
    /// Blank values count as not supplied.
    pub fn new(photo_url: Option<String>, notes: Option<String>) -> Self {
        Self {
            photo_url: photo_url.filter(|value| !value.trim().is_empty()),
            notes: notes.filter(|value| !value.trim().is_empty()),
        }
    }
}

/// Result of feeding one code into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanOutcome {
    /// A record is now staged for confirmation.
    Staged(StageKind),
    /// The code belongs to a record that was already scanned; nothing changed.
    AlreadyScanned(AssetId),
    /// Repeat of the last accepted code inside the debounce window.
    Debounced,
    /// Another record is still waiting for confirmation.
    AwaitingConfirmation,
    /// Camera event while the scanner is off.
    ScannerOff,
    /// Blank code.
    Empty,
}

#[derive(Debug)]
pub struct AuditSession<C: Clock = SystemClock> {
    assets: Vec<Asset>,
    step: AuditStep,
    staged: Option<StagedAsset>,
    debouncer: ScanDebouncer,
    scanner: ScannerToggle,
    summary: Option<String>,
    clock: C,
}

impl Default for AuditSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSession<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, SessionOptions::default())
    }
}

impl<C: Clock> AuditSession<C> {
    pub fn with_clock(clock: C, options: SessionOptions) -> Self {
        Self {
            assets: Vec::new(),
            step: AuditStep::Import,
            staged: None,
            debouncer: ScanDebouncer::new(options.debounce_window),
            scanner: ScannerToggle::default(),
            summary: None,
            clock,
        }
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn step(&self) -> AuditStep {
        self.step
    }

    pub fn staged(&self) -> Option<&StagedAsset> {
        self.staged.as_ref()
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::from_assets(&self.assets)
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    pub fn scanner_active(&self) -> bool {
        self.scanner.is_active()
    }

    pub fn asset(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| &asset.id == id)
    }

    /// Records matching `filter`, in list order.
    pub fn filtered(&self, filter: AssetFilter) -> impl Iterator<Item = &Asset> {
        self.assets
            .iter()
            .filter(move |asset| filter.matches(asset.status))
    }

    fn require_step(&self, expected: AuditStep) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            warn!(expected = %expected, actual = %self.step, "operation rejected for step");
            Err(AuditError::InvalidStep {
                expected,
                actual: self.step,
            }
            .into())
        }
    }

    fn advance(&mut self) {
        if let Some(next) = self.step.next() {
            debug!(from = %self.step, to = %next, "step advanced");
            self.step = next;
        }
    }

    fn require_nothing_staged(&self) -> Result<()> {
        match &self.staged {
            Some(staged) => Err(AuditError::AwaitingConfirmation(staged.asset.id.clone()).into()),
            None => Ok(()),
        }
    }

    /// Parses `text` as an asset list and starts the audit.
    ///
    /// On failure the session stays at the import step.
    pub fn import_text(&mut self, text: &str) -> Result<usize> {
        self.require_step(AuditStep::Import)?;
        let assets = parse_asset_list(text)?;
        self.load_assets(assets)
    }

    /// Replaces the list with already parsed records and starts the audit.
    pub fn load_assets(&mut self, assets: Vec<Asset>) -> Result<usize> {
        self.require_step(AuditStep::Import)?;
        if assets.is_empty() {
            return Err(AuditError::EmptyAssetList.into());
        }
        let count = assets.len();
        self.assets = assets;
        self.advance();
        info!(assets = count, "audit started");
        Ok(count)
    }

    /// Starts the decoder feed. A failed start leaves the scanner off.
    pub fn start_scanner(&mut self, feed: &mut dyn DecoderFeed) -> Result<()> {
        self.require_step(AuditStep::Audit)?;
        self.scanner.start(feed)?;
        Ok(())
    }

    /// Stops the decoder feed. Safe to call at any time.
    pub fn stop_scanner(&mut self, feed: &mut dyn DecoderFeed) {
        self.scanner.stop(feed);
    }

    /// Feeds one decoded or typed code into the reconciliation path.
    pub fn scan(&mut self, code: &str, source: ScanSource) -> Result<ScanOutcome> {
        self.require_step(AuditStep::Audit)?;
        let code = code.trim();
        if code.is_empty() {
            return Ok(ScanOutcome::Empty);
        }
        if source == ScanSource::Camera && !self.scanner.is_active() {
            return Ok(ScanOutcome::ScannerOff);
        }
        if self.staged.is_some() {
            debug!(source = source.as_str(), "scan ignored while awaiting confirmation");
            return Ok(ScanOutcome::AwaitingConfirmation);
        }
        if !self.debouncer.accept(code, self.clock.now()) {
            debug!(source = source.as_str(), "repeat scan debounced");
            return Ok(ScanOutcome::Debounced);
        }

        let outcome = match reconcile(&self.assets, code) {
            ScanDecision::Match(asset) => {
                self.staged = Some(StagedAsset {
                    asset,
                    kind: StageKind::Match,
                });
                ScanOutcome::Staged(StageKind::Match)
            }
            ScanDecision::AlreadyScanned(id) => ScanOutcome::AlreadyScanned(id),
            ScanDecision::Unlisted(asset) => {
                self.staged = Some(StagedAsset {
                    asset,
                    kind: StageKind::NewExtra,
                });
                ScanOutcome::Staged(StageKind::NewExtra)
            }
        };
        debug!(source = source.as_str(), outcome = ?outcome, "scan reconciled");
        Ok(outcome)
    }

    /// Stages an existing record so photo and notes can be attached.
    ///
    /// Refused while another record is awaiting confirmation.
    pub fn open(&mut self, id: &AssetId) -> Result<&StagedAsset> {
        self.require_step(AuditStep::Audit)?;
        self.require_nothing_staged()?;
        let asset = self
            .asset(id)
            .cloned()
            .ok_or_else(|| AuditError::UnknownAsset(id.clone()))?;
        let kind = if asset.status == AssetStatus::Pending {
            StageKind::Match
        } else {
            StageKind::Review
        };
        Ok(self.staged.insert(StagedAsset { asset, kind }))
    }

    /// Commits the staged record.
    ///
    /// A record already in the list is marked found (or, when it was already
    /// scanned, only takes the new evidence). Only a record synthesized from
    /// an unmatched scan is appended, as extra. Returns the committed record.
    pub fn confirm(&mut self, evidence: Evidence) -> Result<&Asset> {
        self.require_step(AuditStep::Audit)?;
        let staged = self.staged.take().ok_or(AuditError::NothingStaged)?;
        let existing = self
            .assets
            .iter()
            .position(|asset| asset.id == staged.asset.id);
        let now = self.clock.now();
        let index = match (staged.kind, existing) {
            (StageKind::NewExtra, _) => {
                let mut asset = staged.asset;
                asset.status = AssetStatus::Extra;
                asset.photo_url = evidence.photo_url;
                asset.notes = evidence.notes;
                asset.scan_timestamp = Some(now);
                self.assets.push(asset);
                self.assets.len() - 1
            }
            (StageKind::Match | StageKind::Review, Some(index)) => {
                self.assets[index].mark_found(now, evidence.photo_url, evidence.notes);
                index
            }
            (StageKind::Match | StageKind::Review, None) => {
                let id = staged.asset.id.clone();
                self.staged = Some(staged);
                return Err(AuditError::UnknownAsset(id).into());
            }
        };
        let asset = &self.assets[index];
        info!(id = %asset.id, status = %asset.status, "asset confirmed");
        Ok(asset)
    }

    /// Drops the staged record without touching the list.
    pub fn cancel(&mut self) -> bool {
        self.staged.take().is_some()
    }

    /// Removes an extra record. Any other record is left in place.
    ///
    /// Returns whether a record was removed. A record that is awaiting
    /// confirmation cannot be deleted until it is confirmed or cancelled.
    pub fn delete_extra(&mut self, id: &AssetId) -> Result<bool> {
        self.require_step(AuditStep::Audit)?;
        let Some(index) = self
            .assets
            .iter()
            .position(|asset| &asset.id == id && asset.status == AssetStatus::Extra)
        else {
            debug!(id = %id, "delete ignored for non-extra record");
            return Ok(false);
        };
        if self.staged.as_ref().is_some_and(|staged| &staged.asset.id == id) {
            warn!(id = %id, "delete rejected for record awaiting confirmation");
            return Err(AuditError::AwaitingConfirmation(id.clone()).into());
        }
        self.assets.remove(index);
        info!(id = %id, "extra asset deleted");
        Ok(true)
    }

    /// Ends scanning and moves to the export step.
    pub fn finish_audit(&mut self) -> Result<InventoryStats> {
        self.require_step(AuditStep::Audit)?;
        self.staged = None;
        self.scanner.force_off();
        self.debouncer.reset();
        self.advance();
        let stats = self.stats();
        info!(
            total = stats.total,
            found = stats.found,
            pending = stats.pending,
            extra = stats.extra,
            "audit finished"
        );
        Ok(stats)
    }

    /// Stores the generated summary. Dropped unless the session is still exporting.
    pub fn record_summary(&mut self, summary: String) -> bool {
        if self.step != AuditStep::Export {
            debug!(step = %self.step, "summary discarded");
            return false;
        }
        self.summary = Some(summary);
        true
    }

    /// Clears everything and returns to the import step.
    pub fn start_new_audit(&mut self) -> Result<()> {
        self.require_step(AuditStep::Export)?;
        self.assets.clear();
        self.staged = None;
        self.summary = None;
        self.debouncer.reset();
        self.scanner.force_off();
        self.step = AuditStep::Import;
        info!("new audit started");
        Ok(())
    }
}
