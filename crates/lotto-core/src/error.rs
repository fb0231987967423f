use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LottoError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("csv error: {0}")]
    Csv(String),

    #[error("no valid draws in range 1..={} were found", crate::tally::MAX_NUMBER)]
    InsufficientData,

    #[error("statistics error: {0}")]
    Stats(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(String),
}

pub type LottoResult<T> = Result<T, LottoError>;
