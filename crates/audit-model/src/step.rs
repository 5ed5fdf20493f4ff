use serde::{Deserialize, Serialize};
use std::fmt;

/// Workflow step of an audit session.
///
/// Steps advance linearly `Import -> Audit -> Export`; the only way back is
/// starting a new audit, which returns to `Import` with an empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditStep {
    #[default]
    Import,
    Audit,
    Export,
}

impl AuditStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStep::Import => "IMPORT",
            AuditStep::Audit => "AUDIT",
            AuditStep::Export => "EXPORT",
        }
    }

    /// The step that follows this one, if any.
    pub fn next(&self) -> Option<AuditStep> {
        match self {
            AuditStep::Import => Some(AuditStep::Audit),
            AuditStep::Audit => Some(AuditStep::Export),
            AuditStep::Export => None,
        }
    }
}

impl fmt::Display for AuditStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
