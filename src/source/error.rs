use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("INI file does not exist: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    #[error("unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
