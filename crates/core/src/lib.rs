//! Core types for the Hindi-Santali translator
//!
//! This crate provides foundational types used across all other crates:
//! - Language and script definitions (Hindi, Santali, English)
//! - Translation result and provenance types
//! - Collaborator traits for speech engines
//! - Error types

pub mod error;
pub mod language;
pub mod traits;
pub mod translation;

pub use error::{Error, Result};
pub use language::{Language, LanguagePair, Script};
pub use translation::{
    LookupDirection, MatchSource, TranslationMethod, TranslationResult, WordMapping,
};

pub use traits::{SpeechToText, SynthesizedAudio, TextToSpeech};
