//! Error types shared across the translator crates

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty input text")]
    EmptyInput,

    #[error("Unsupported language pair: {from} -> {to}")]
    UnsupportedLanguagePair { from: String, to: String },

    #[error("Speech-to-text error: {0}")]
    Transcription(String),

    #[error("Text-to-speech error: {0}")]
    Synthesis(String),
}

pub type Result<T> = std::result::Result<T, Error>;
