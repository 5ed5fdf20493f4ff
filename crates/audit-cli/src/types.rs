use std::path::PathBuf;

use audit_cli::batch::ReplayCounts;
use audit_model::InventoryStats;

/// Outcome of a finished audit, interactive or batch.
pub struct AuditResult {
    pub report_path: PathBuf,
    pub stats: InventoryStats,
    pub summary: Option<String>,
    pub replay: Option<ReplayCounts>,
}
