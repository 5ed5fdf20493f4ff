use thiserror::Error;

use audit_ingest::IngestError;
use audit_model::AuditError;

use crate::scanner::ScannerError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Audit(#[from] AuditError),
    #[error("import failed: {0}")]
    Import(#[from] IngestError),
    #[error(transparent)]
    Scanner(#[from] ScannerError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
