use std::fmt;

use uuid::Uuid;

/// Opaque asset identifier, assigned once when the record is created.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    /// Identifier for the `row`-th imported record (0-based).
    pub fn for_import(row: usize) -> Self {
        Self(format!("import-{row}-{}", Uuid::new_v4().simple()))
    }

    /// Identifier for a record synthesized from an unmatched scan.
    pub fn for_extra() -> Self {
        Self(format!("extra-{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.trim().to_string())
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
