//! Flat Hindi ↔ English lexicon

use indexmap::IndexMap;

use crate::normalize::normalize;

/// Hindi ↔ English word table
///
/// English keys are stored lowercased. When several Hindi words share an
/// English gloss, the first one in table order is the English → Hindi answer.
#[derive(Debug, Clone, Default)]
pub struct EnglishLexicon {
    hindi_to_english: IndexMap<String, String>,
    english_to_hindi: IndexMap<String, String>,
}

impl EnglishLexicon {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut lexicon = Self::default();
        for (hindi, english) in pairs {
            let hindi = normalize(hindi);
            let english = normalize(english);
            if hindi.is_empty() || english.is_empty() {
                continue;
            }
            lexicon
                .english_to_hindi
                .entry(english.to_lowercase())
                .or_insert_with(|| hindi.clone());
            lexicon.hindi_to_english.insert(hindi, english);
        }
        lexicon
    }

    /// English gloss for a Hindi word or phrase
    pub fn to_english(&self, hindi: &str) -> Option<&str> {
        self.hindi_to_english.get(&normalize(hindi)).map(String::as_str)
    }

    /// Hindi word for an English word or phrase (case-insensitive)
    pub fn to_hindi(&self, english: &str) -> Option<&str> {
        self.english_to_hindi
            .get(&normalize(english).to_lowercase())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.hindi_to_english.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hindi_to_english.is_empty()
    }
}
