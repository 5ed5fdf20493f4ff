//! Data model for physical-asset inventory audits.
//!
//! An audit compares an imported list of expected assets against the codes
//! scanned on site. Every record carries an [`AssetStatus`]; the session moves
//! through the [`AuditStep`] workflow and reports [`InventoryStats`].

pub mod asset;
pub mod error;
pub mod ids;
pub mod stats;
pub mod status;
pub mod step;

pub use asset::{Asset, EXTRA_ASSET_NAME, UNKNOWN_ASSET_NAME, UNKNOWN_LOCATION};
pub use error::{AuditError, Result};
pub use ids::AssetId;
pub use stats::InventoryStats;
pub use status::{AssetFilter, AssetStatus};
pub use step::AuditStep;
