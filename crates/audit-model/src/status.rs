//! Asset status lifecycle and list filters.
//!
//! A record is either created `Pending` from the imported list and may later
//! become `Found`, or it is created directly as `Extra` when a scanned code
//! matches nothing. No transition leads back to `Pending`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssetStatus {
    /// Expected and not yet scanned.
    #[default]
    Pending,
    /// Expected and scanned.
    Found,
    /// Scanned but absent from the imported list.
    Extra,
}

impl AssetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Pending => "PENDING",
            AssetStatus::Found => "FOUND",
            AssetStatus::Extra => "EXTRA",
        }
    }

    /// Label written to reports and shown in tables.
    pub fn label(&self) -> &'static str {
        match self {
            AssetStatus::Found => "已盘点",
            AssetStatus::Extra => "新增",
            AssetStatus::Pending => "未盘点",
        }
    }

    /// True once the record has been accounted for by a scan.
    pub fn is_scanned(&self) -> bool {
        !matches!(self, AssetStatus::Pending)
    }
}

impl fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View filter over the asset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssetFilter {
    #[default]
    All,
    /// Found and extra records.
    Found,
    Pending,
}

impl AssetFilter {
    pub fn matches(&self, status: AssetStatus) -> bool {
        match self {
            AssetFilter::All => true,
            AssetFilter::Found => status.is_scanned(),
            AssetFilter::Pending => status == AssetStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AssetFilter::All => "全部",
            AssetFilter::Found => "已盘点",
            AssetFilter::Pending => "待盘点",
        }
    }
}

impl FromStr for AssetFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(AssetFilter::All),
            "found" => Ok(AssetFilter::Found),
            "pending" => Ok(AssetFilter::Pending),
            _ => Err(format!("Unknown filter: {s}")),
        }
    }
}
