//! Decoder feeds for the terminal front end.
//!
//! A handheld scanner in keyboard-wedge mode types each code followed by
//! Enter, so in the interactive session the "camera" is simply stdin. Batch
//! reconciliation replays a file of recorded scans instead.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use audit_core::{DecoderFeed, ScannerError};

/// Keyboard-wedge scanner typing into the session's input.
///
/// Nothing has to be opened; the codes arrive on the same input as commands.
#[derive(Debug, Default)]
pub struct WedgeFeed;

impl DecoderFeed for WedgeFeed {
    fn start(&mut self) -> Result<(), ScannerError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

/// One recorded decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEvent {
    pub code: String,
    /// Decode time; the replay clock stays where it is when absent.
    pub at: Option<DateTime<Utc>>,
}

/// Parses `CODE` or `CODE,<RFC 3339 time>`. Blank lines yield `None`.
///
/// A trailing field that is not a timestamp is kept as part of the code.
pub fn parse_scan_line(line: &str) -> Option<ScanEvent> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() {
        return None;
    }
    if let Some((code, time)) = line.rsplit_once(',')
        && let Ok(at) = DateTime::parse_from_rfc3339(time.trim())
    {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        return Some(ScanEvent {
            code: code.to_string(),
            at: Some(at.with_timezone(&Utc)),
        });
    }
    Some(ScanEvent {
        code: line.to_string(),
        at: None,
    })
}

/// Recorded scans read from a file when the feed starts.
#[derive(Debug)]
pub struct ScanFileFeed {
    path: PathBuf,
    events: Vec<ScanEvent>,
}

impl ScanFileFeed {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            events: Vec::new(),
        }
    }

    /// Drains the events loaded by the last start.
    pub fn take_events(&mut self) -> Vec<ScanEvent> {
        std::mem::take(&mut self.events)
    }
}

impl DecoderFeed for ScanFileFeed {
    fn start(&mut self) -> Result<(), ScannerError> {
        let text = fs::read_to_string(&self.path).map_err(|error| {
            ScannerError::Unavailable(format!("{}: {error}", self.path.display()))
        })?;
        self.events = text.lines().filter_map(parse_scan_line).collect();
        debug!(path = %self.path.display(), scans = self.events.len(), "scan file loaded");
        Ok(())
    }

    fn stop(&mut self) {
        self.events.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_code_with_timestamp() {
        let event = parse_scan_line("CH-001,2025-03-01T06:30:05Z").unwrap();
        assert_eq!(event.code, "CH-001");
        assert_eq!(
            event.at,
            Some(DateTime::parse_from_rfc3339("2025-03-01T06:30:05Z").unwrap().to_utc())
        );
    }

    #[test]
    fn keeps_commas_that_are_not_timestamps() {
        let event = parse_scan_line("A,B").unwrap();
        assert_eq!(event.code, "A,B");
        assert_eq!(event.at, None);
    }

    #[test]
    fn skips_blank_lines() {
        assert_eq!(parse_scan_line("   "), None);
        assert_eq!(parse_scan_line("\u{feff}"), None);
    }

    #[test]
    fn missing_scan_file_fails_to_start() {
        let mut feed = ScanFileFeed::new("/nonexistent/scans.txt");
        assert!(matches!(feed.start(), Err(ScannerError::Unavailable(_))));
        assert!(feed.take_events().is_empty());
    }
}
