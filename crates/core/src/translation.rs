//! Translation result types
//!
//! Every call to the engine produces a [`TranslationResult`]. Failures are
//! values too: `success` is false and `error` carries the message.

use serde::{Deserialize, Serialize};

use crate::Language;

/// Direction of a dictionary lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupDirection {
    HindiToSantali,
    SantaliToHindi,
}

/// Which resolver tier produced a word mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    Dictionary,
    DictionaryPhrase,
    StemMatch,
    FuzzyMatch,
    Transliteration,
    Unknown,
}

impl MatchSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dictionary => "dictionary",
            Self::DictionaryPhrase => "dictionary_phrase",
            Self::StemMatch => "stem_match",
            Self::FuzzyMatch => "fuzzy_match",
            Self::Transliteration => "transliteration",
            Self::Unknown => "unknown",
        }
    }

    /// Whether tokens resolved by this tier count as matched words
    pub fn counts_as_match(&self) -> bool {
        !matches!(self, Self::Transliteration | Self::Unknown)
    }
}

/// How the whole text was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationMethod {
    /// The whole input was a single dictionary key
    ExactPhraseMatch,
    /// Token-by-token resolution
    WordByWord,
}

/// Provenance of one resolved token or phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMapping {
    pub source: String,
    pub target: String,
    pub match_source: MatchSource,
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl WordMapping {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        match_source: MatchSource,
        confidence: f64,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            match_source,
            confidence,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Outcome of a translation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub success: bool,
    pub source_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_language: Option<Language>,
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_language: Option<Language>,
    /// Percentage in [0, 100]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<TranslationMethod>,
    #[serde(default)]
    pub word_mappings: Vec<WordMapping>,
    pub matched_words: usize,
    pub total_words: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    /// Build a failed result carrying `error`
    pub fn failure(source_text: impl Into<String>, error: impl ToString) -> Self {
        Self {
            success: false,
            source_text: source_text.into(),
            source_language: None,
            translated_text: String::new(),
            target_language: None,
            confidence: 0.0,
            method: None,
            word_mappings: Vec::new(),
            matched_words: 0,
            total_words: 0,
            error: Some(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_failure_result() {
        let result = TranslationResult::failure("", Error::EmptyInput);
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some("Empty input text"));
        assert!(result.word_mappings.is_empty());
    }

    #[test]
    fn test_match_source_counting() {
        assert!(MatchSource::StemMatch.counts_as_match());
        assert!(MatchSource::DictionaryPhrase.counts_as_match());
        assert!(!MatchSource::Transliteration.counts_as_match());
        assert!(!MatchSource::Unknown.counts_as_match());
    }

    #[test]
    fn test_serialized_shape() {
        let mapping = WordMapping::new("पानी", "ᱫᱟᱜ", MatchSource::FuzzyMatch, 0.8);
        let json = serde_json::to_value(&mapping).unwrap();
        assert_eq!(json["match_source"], "fuzzy_match");
        assert!(json.get("note").is_none());

        let failed = TranslationResult::failure("x", "boom");
        let json = serde_json::to_value(&failed).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "boom");
        assert!(json.get("method").is_none());
    }
}
