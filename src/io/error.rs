use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to read composition table: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("{} does not exist", .path.display())]
    MissingFile { path: PathBuf },

    #[error("invalid composition table row {row}: {details}")]
    Table { row: usize, details: String },

    #[error("invalid element feature table: {details}")]
    Features { details: String },
}

impl Error {
    pub fn missing_file(path: impl Into<PathBuf>) -> Self {
        Self::MissingFile { path: path.into() }
    }

    pub fn table(row: usize, details: impl Into<String>) -> Self {
        Self::Table {
            row,
            details: details.into(),
        }
    }

    pub fn features(details: impl Into<String>) -> Self {
        Self::Features {
            details: details.into(),
        }
    }
}
