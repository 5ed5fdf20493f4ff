use thiserror::Error;

use crate::ids::AssetId;
use crate::step::AuditStep;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("operation requires the {expected} step, session is at {actual}")]
    InvalidStep {
        expected: AuditStep,
        actual: AuditStep,
    },
    #[error("no asset with id {0}")]
    UnknownAsset(AssetId),
    #[error("no asset is awaiting confirmation")]
    NothingStaged,
    #[error("asset {0} is awaiting confirmation; confirm or cancel it first")]
    AwaitingConfirmation(AssetId),
    #[error("asset list is empty")]
    EmptyAssetList,
}

pub type Result<T> = std::result::Result<T, AuditError>;
