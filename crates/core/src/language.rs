//! Language definitions for the translator
//!
//! Hindi and Santali are the two core languages. English is carried for the
//! auxiliary Hindi-English lexicon only.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Hindi,
    Santali,
    English,
}

impl Language {
    /// Get ISO 639-1/639-3 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hindi => "hi",
            Self::Santali => "sat",
            Self::English => "en",
        }
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hindi => "Hindi",
            Self::Santali => "Santali",
            Self::English => "English",
        }
    }

    /// Get script used by this language
    pub fn script(&self) -> Script {
        match self {
            Self::Hindi => Script::Devanagari,
            Self::Santali => Script::OlChiki,
            Self::English => Script::Latin,
        }
    }

    /// Parse from string (case-insensitive, accepts codes and names)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "hi" | "hin" | "hindi" => Some(Self::Hindi),
            "sat" | "santali" | "santhali" => Some(Self::Santali),
            "en" | "eng" | "english" => Some(Self::English),
            _ => None,
        }
    }

    /// The two languages the dictionary store is built around
    pub fn core() -> &'static [Language] {
        &[Self::Hindi, Self::Santali]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Writing scripts handled by the translator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Script {
    Devanagari,
    OlChiki,
    Latin,
}

impl Script {
    /// Script of a single character, if it belongs to one we handle
    pub fn of_char(c: char) -> Option<Self> {
        match c {
            '\u{0900}'..='\u{097F}' => Some(Self::Devanagari),
            '\u{1C50}'..='\u{1C7F}' => Some(Self::OlChiki),
            c if c.is_ascii_alphabetic() => Some(Self::Latin),
            _ => None,
        }
    }

    /// Whether any character of `text` is written in this script
    pub fn is_present_in(&self, text: &str) -> bool {
        text.chars().any(|c| Self::of_char(c) == Some(*self))
    }
}

/// An ordered (source, target) language pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: Language,
    pub target: Language,
}

impl LanguagePair {
    /// The four directions the resolution pipeline handles
    pub const SUPPORTED: [LanguagePair; 4] = [
        LanguagePair::new(Language::Hindi, Language::Santali),
        LanguagePair::new(Language::Santali, Language::Hindi),
        LanguagePair::new(Language::Hindi, Language::English),
        LanguagePair::new(Language::English, Language::Hindi),
    ];

    pub const fn new(source: Language, target: Language) -> Self {
        Self { source, target }
    }

    /// Resolve a pair from raw codes; `None` unless the pair is supported
    pub fn parse(source: &str, target: &str) -> Option<Self> {
        let pair = Self::new(
            Language::from_str_loose(source)?,
            Language::from_str_loose(target)?,
        );
        pair.is_supported().then_some(pair)
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
