use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AssetId;
use crate::status::AssetStatus;

/// Name given to imported rows without one.
pub const UNKNOWN_ASSET_NAME: &str = "未知物品";

/// Name given to records synthesized from unmatched scans.
pub const EXTRA_ASSET_NAME: &str = "新物品";

/// Location shown for records without one.
pub const UNKNOWN_LOCATION: &str = "未知位置";

/// One inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: AssetId,
    pub name: String,
    pub barcode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: AssetStatus,
    /// Embedded image reference (`data:` URI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Asset {
    /// An expected record awaiting its scan.
    pub fn pending(id: AssetId, name: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            barcode: barcode.into(),
            serial_number: None,
            location: None,
            status: AssetStatus::Pending,
            photo_url: None,
            scan_timestamp: None,
            notes: None,
        }
    }

    /// A record for a scanned code that matched nothing in the list.
    ///
    /// The timestamp stays unset until the record is confirmed.
    pub fn extra(barcode: impl Into<String>) -> Self {
        Self {
            status: AssetStatus::Extra,
            ..Self::pending(AssetId::for_extra(), EXTRA_ASSET_NAME, barcode)
        }
    }

    pub fn with_location(mut self, location: Option<String>) -> Self {
        self.location = location;
        self
    }

    pub fn with_serial_number(mut self, serial_number: Option<String>) -> Self {
        self.serial_number = serial_number;
        self
    }

    /// Location or the unknown-location placeholder.
    pub fn location_or_unknown(&self) -> &str {
        self.location.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    /// Marks a pending record as found at `at`.
    ///
    /// Photo and notes are replaced only when supplied. Records that are not
    /// pending keep their status and timestamp and only take the evidence.
    pub fn mark_found(
        &mut self,
        at: DateTime<Utc>,
        photo_url: Option<String>,
        notes: Option<String>,
    ) {
        if self.status == AssetStatus::Pending {
            self.status = AssetStatus::Found;
            self.scan_timestamp = Some(at);
        }
        self.attach_evidence(photo_url, notes);
    }

    /// Replaces photo and notes with the supplied values, keeping old ones otherwise.
    pub fn attach_evidence(&mut self, photo_url: Option<String>, notes: Option<String>) {
        if let Some(photo_url) = photo_url {
            self.photo_url = Some(photo_url);
        }
        if let Some(notes) = notes {
            self.notes = Some(notes);
        }
    }
}
