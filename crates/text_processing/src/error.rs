//! Error types for dictionary loading and export

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("Dictionary source not found: {0}")]
    NotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column '{0}' in dictionary header")]
    MissingColumn(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
