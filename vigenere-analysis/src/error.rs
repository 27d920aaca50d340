//! Error types for cryptanalysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Invalid key length (must be > 0)")]
    InvalidKeyLength,

    #[error("Empty key")]
    EmptyKey,

    #[error("No shift with positive correlation for column {0}")]
    UnresolvedColumn(usize),

    #[error("Invalid character {found:?} at position {position} (expected uppercase A-Z)")]
    InvalidInput { position: usize, found: char },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
