//! Audit session state and the scan reconciliation engine.
//!
//! [`AuditSession`] owns the asset list for one audit. Decoded codes from the
//! camera and typed codes from manual entry go through the same path:
//! [`ScanDebouncer`] drops repeats, [`reconcile`] decides what the code means,
//! and the resulting record is staged until the user confirms or cancels it.

pub mod clock;
pub mod debounce;
pub mod error;
pub mod reconcile;
pub mod scanner;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use debounce::{DEFAULT_DEBOUNCE_WINDOW, ScanDebouncer};
pub use error::{CoreError, Result};
pub use reconcile::{ScanDecision, reconcile};
pub use scanner::{DecoderFeed, ScannerError, ScannerToggle};
pub use session::{
    AuditSession, Evidence, ScanOutcome, ScanSource, SessionOptions, StageKind, StagedAsset,
};
