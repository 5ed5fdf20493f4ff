use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read asset list: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("asset list is not valid UTF-8: {path}")]
    Encoding { path: PathBuf },
    #[error("line {line}: {source}")]
    Csv {
        line: usize,
        #[source]
        source: csv::Error,
    },
    #[error("no asset rows found after removing the header")]
    NoRows,
}

pub type Result<T> = std::result::Result<T, IngestError>;
