//! Scanner on/off toggle around an external decoder.

use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("scanner could not start: {0}")]
    Unavailable(String),
}

/// External source of decoded codes (camera decoder, wedge scanner, scan file).
pub trait DecoderFeed {
    fn start(&mut self) -> Result<(), ScannerError>;
    fn stop(&mut self);
}

/// Tracks whether the decoder feed is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScannerToggle {
    active: bool,
}

impl ScannerToggle {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts the feed. A failed start leaves the toggle off.
    pub fn start(&mut self, feed: &mut dyn DecoderFeed) -> Result<(), ScannerError> {
        if self.active {
            return Ok(());
        }
        match feed.start() {
            Ok(()) => {
                debug!("scanner started");
                self.active = true;
                Ok(())
            }
            Err(error) => {
                warn!(%error, "scanner start failed");
                self.active = false;
                Err(error)
            }
        }
    }

    /// Stops the feed. Safe to call when already stopped.
    pub fn stop(&mut self, feed: &mut dyn DecoderFeed) {
        if self.active {
            feed.stop();
            self.active = false;
            debug!("scanner stopped");
        }
    }

    /// Marks the toggle off without touching a feed.
    pub(crate) fn force_off(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeFeed {
        fail: bool,
        starts: usize,
        stops: usize,
    }

    impl DecoderFeed for FakeFeed {
        fn start(&mut self) -> Result<(), ScannerError> {
            self.starts += 1;
            if self.fail {
                Err(ScannerError::Unavailable("no camera".to_string()))
            } else {
                Ok(())
            }
        }

        fn stop(&mut self) {
            self.stops += 1;
        }
    }

    #[test]
    fn failed_start_leaves_toggle_off() {
        let mut feed = FakeFeed {
            fail: true,
            ..FakeFeed::default()
        };
        let mut toggle = ScannerToggle::default();
        assert!(toggle.start(&mut feed).is_err());
        assert!(!toggle.is_active());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut feed = FakeFeed::default();
        let mut toggle = ScannerToggle::default();
        toggle.start(&mut feed).unwrap();
        toggle.start(&mut feed).unwrap();
        assert_eq!(feed.starts, 1);
        toggle.stop(&mut feed);
        toggle.stop(&mut feed);
        assert_eq!(feed.stops, 1);
        assert!(!toggle.is_active());
    }
}
