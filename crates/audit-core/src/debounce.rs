use chrono::{DateTime, TimeDelta, Utc};

/// Repeats of the last accepted code inside this window are dropped.
pub const DEFAULT_DEBOUNCE_WINDOW: TimeDelta = TimeDelta::seconds(3);

/// Drops a code that repeats the last accepted one within the window.
///
/// The camera keeps sampling frames after a successful decode, so one
/// physical scan arrives as a burst of identical events. The window runs
/// from the last acceptance; rejected repeats do not extend it.
#[derive(Debug, Clone)]
pub struct ScanDebouncer {
    window: TimeDelta,
    last: Option<(String, DateTime<Utc>)>,
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_WINDOW)
    }
}

impl ScanDebouncer {
    pub fn new(window: TimeDelta) -> Self {
        Self { window, last: None }
    }

    /// Returns true when `code` should be processed, recording it as the last acceptance.
    pub fn accept(&mut self, code: &str, now: DateTime<Utc>) -> bool {
        if let Some((last_code, accepted_at)) = &self.last {
            if now - *accepted_at >= self.window {
                self.last = None;
            } else if last_code == code {
                return false;
            }
        }
        self.last = Some((code.to_string(), now));
        true
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}
