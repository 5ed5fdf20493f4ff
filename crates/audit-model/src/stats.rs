use serde::Serialize;

use crate::asset::Asset;
use crate::status::AssetStatus;

/// Counts derived from the current asset list. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total: usize,
    /// Records no longer pending (found plus extra).
    pub found: usize,
    pub pending: usize,
    pub extra: usize,
    /// `found / total`, 0 for an empty list.
    pub completion_rate: f64,
}

impl InventoryStats {
    pub fn from_assets(assets: &[Asset]) -> Self {
        let total = assets.len();
        let pending = assets
            .iter()
            .filter(|asset| asset.status == AssetStatus::Pending)
            .count();
        let extra = assets
            .iter()
            .filter(|asset| asset.status == AssetStatus::Extra)
            .count();
        let found = total - pending;
        let completion_rate = if total == 0 {
            0.0
        } else {
            found as f64 / total as f64
        };
        Self {
            total,
            found,
            pending,
            extra,
            completion_rate,
        }
    }

    /// Number of records that came from the imported list.
    pub fn expected(&self) -> usize {
        self.total - self.extra
    }

    /// Share of imported records that were found, ignoring extras.
    pub fn expected_completion_rate(&self) -> f64 {
        let expected = self.expected();
        if expected == 0 {
            0.0
        } else {
            (expected - self.pending) as f64 / expected as f64
        }
    }

    /// Completion rate rounded to a whole percentage.
    pub fn progress_percent(&self) -> u32 {
        (self.completion_rate * 100.0).round() as u32
    }
}
