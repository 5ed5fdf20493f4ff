//! Line commands for the interactive audit session.

use std::path::PathBuf;

use audit_model::AssetFilter;

pub const HELP_TEXT: &str = "\
Commands:
  <CODE> | scan <CODE>   decoded code from the scanner
  manual <CODE>          typed code (works while the scanner is off)
  note <TEXT>            notes for the item awaiting confirmation
  photo <PATH>           attach an image to the item awaiting confirmation
  confirm | cancel       commit or discard the item awaiting confirmation
  open <ID|CODE>         review an existing record
  delete <ID|CODE>       remove an extra record
  list [all|found|pending]
  stats                  progress so far
  start | stop           turn the scanner on or off
  finish                 end the audit and export the report
  help";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Scan(String),
    Manual(String),
    Note(String),
    Photo(PathBuf),
    Confirm,
    Cancel,
    /// Record id or barcode.
    Open(String),
    /// Record id or barcode.
    Delete(String),
    List(AssetFilter),
    Stats,
    Start,
    Stop,
    Finish,
    Help,
    Blank,
    /// Known command used wrongly; carries the usage hint.
    Invalid(String),
}

/// Parses one input line.
///
/// A line whose first word is not a command is taken whole as a decoded
/// code, which is what a keyboard-wedge scanner types. Codes that collide
/// with a command word go through `scan <CODE>`.
pub fn parse_line(line: &str) -> ReplCommand {
    let line = line.trim();
    if line.is_empty() {
        return ReplCommand::Blank;
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    match word.to_lowercase().as_str() {
        "scan" => with_argument(rest, "scan <CODE>", |code| ReplCommand::Scan(code.to_string())),
        "manual" => with_argument(rest, "manual <CODE>", |code| {
            ReplCommand::Manual(code.to_string())
        }),
        "note" => with_argument(rest, "note <TEXT>", |text| ReplCommand::Note(text.to_string())),
        "photo" => with_argument(rest, "photo <PATH>", |path| {
            ReplCommand::Photo(PathBuf::from(path))
        }),
        "open" => with_argument(rest, "open <ID|CODE>", |target| {
            ReplCommand::Open(target.to_string())
        }),
        "delete" => with_argument(rest, "delete <ID|CODE>", |target| {
            ReplCommand::Delete(target.to_string())
        }),
        "list" => match rest.parse::<AssetFilter>() {
            Ok(filter) => ReplCommand::List(filter),
            Err(_) => ReplCommand::Invalid("list [all|found|pending]".to_string()),
        },
        "confirm" => ReplCommand::Confirm,
        "cancel" => ReplCommand::Cancel,
        "stats" => ReplCommand::Stats,
        "start" => ReplCommand::Start,
        "stop" => ReplCommand::Stop,
        "finish" => ReplCommand::Finish,
        "help" | "?" => ReplCommand::Help,
        _ => ReplCommand::Scan(line.to_string()),
    }
}

fn with_argument(
    rest: &str,
    usage: &str,
    build: impl FnOnce(&str) -> ReplCommand,
) -> ReplCommand {
    if rest.is_empty() {
        ReplCommand::Invalid(usage.to_string())
    } else {
        build(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_line_is_a_scan() {
        assert_eq!(parse_line("  CH-001 "), ReplCommand::Scan("CH-001".to_string()));
        assert_eq!(
            parse_line("SN 8833 X"),
            ReplCommand::Scan("SN 8833 X".to_string())
        );
    }

    #[test]
    fn command_words_are_case_insensitive() {
        assert_eq!(parse_line("CONFIRM"), ReplCommand::Confirm);
        assert_eq!(
            parse_line("Manual CH-001"),
            ReplCommand::Manual("CH-001".to_string())
        );
    }

    #[test]
    fn scan_prefix_allows_codes_named_like_commands() {
        assert_eq!(parse_line("scan stop"), ReplCommand::Scan("stop".to_string()));
    }

    #[test]
    fn notes_keep_inner_spacing() {
        assert_eq!(
            parse_line("note left  leg  loose"),
            ReplCommand::Note("left  leg  loose".to_string())
        );
    }

    #[test]
    fn missing_argument_reports_usage() {
        assert_eq!(
            parse_line("manual"),
            ReplCommand::Invalid("manual <CODE>".to_string())
        );
        assert_eq!(
            parse_line("list extra"),
            ReplCommand::Invalid("list [all|found|pending]".to_string())
        );
    }

    #[test]
    fn list_defaults_to_all() {
        assert_eq!(parse_line("list"), ReplCommand::List(AssetFilter::All));
        assert_eq!(
            parse_line("list pending"),
            ReplCommand::List(AssetFilter::Pending)
        );
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(parse_line(" \t "), ReplCommand::Blank);
    }
}
