use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode report: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode report: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
