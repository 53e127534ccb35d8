//! Hindi ↔ Santali text processing and translation
//!
//! This crate provides:
//! - **Normalization and tokenization**: NFC, whitespace, sentences and words
//! - **Dictionary store**: CSV loading with row validation, bidirectional lookup,
//!   fuzzy, substring and prefix search
//! - **Curated data**: hand-verified Santali and English tables applied over the CSV
//! - **Translation**: ordered resolver pipelines per language pair with a result cache
//! - **Transliteration**: Devanagari → Ol Chiki letters, Ol Chiki → Latin pronunciation
//! - **Speech**: speech-in/speech-out wrapper over pluggable STT and TTS engines
//!
//! # Example
//!
//! ```ignore
//! use santali_translator_config::Settings;
//! use santali_translator_text_processing::TranslationEngine;
//!
//! let engine = TranslationEngine::from_settings(&Settings::default());
//! let result = engine.translate("मेरा नाम", "hi", "sat");
//! println!("{} ({}%)", result.translated_text, result.confidence);
//! ```

pub mod curated;
pub mod dictionary;
pub mod normalize;
pub mod speech;
pub mod tokenizer;
pub mod translation;
pub mod transliteration;

mod error;

pub use error::{DictionaryError, Result};

// Re-export key types
pub use dictionary::{
    DictionarySource, DictionaryStats, DictionaryStore, EnglishLexicon, FuzzyMatch, LoadReport,
};
pub use normalize::normalize;
pub use speech::SpeechTranslator;
pub use tokenizer::{clean_text, tokenize_sentences, tokenize_words};
pub use translation::{ResolutionPipeline, TranslationCache, TranslationEngine};
pub use transliteration::{is_ol_chiki, prepare_for_speech, pronounce, transliterate};
