//! Resolver strategies
//!
//! Each strategy looks at the token stream at one position and either
//! resolves one or more tokens or declines. A [`ResolutionPipeline`] tries
//! its strategies in order and takes the first answer.
//!
//! [`ResolutionPipeline`]: super::pipeline::ResolutionPipeline

use std::sync::Arc;

use santali_translator_core::{LookupDirection, MatchSource};

use crate::dictionary::{DictionaryStore, EnglishLexicon};
use crate::tokenizer::is_punctuation;
use crate::transliteration::transliterate;

/// Inflectional and postpositional suffixes, longest first
pub const HINDI_SUFFIXES: &[&str] = &[
    "ियों", "ियाँ", "ाओं", "ाएँ", "में", "कर", "ने", "की", "का", "के", "से", "पर", "को", "ता",
    "ती", "ते", "ना", "नी", "ाँ", "ों", "ें", "ां", "ा", "ी", "े", "ो", "ु", "ू",
];

/// Note attached to transliterated tokens
pub const TRANSLITERATION_NOTE: &str = "Phonetic transliteration (not in dictionary)";

/// What a strategy produced at one position
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Tokens consumed, at least one
    pub consumed: usize,
    pub target: String,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Provenance {
    /// Copied through without a mapping; not counted as a word
    Punctuation,
    Resolved {
        source: MatchSource,
        confidence: f64,
        note: Option<&'static str>,
    },
}

impl Resolution {
    fn resolved(consumed: usize, target: impl Into<String>, source: MatchSource, confidence: f64) -> Self {
        Self {
            consumed,
            target: target.into(),
            provenance: Provenance::Resolved {
                source,
                confidence,
                note: None,
            },
        }
    }
}

/// A single resolution tier
pub trait Resolver: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Try to resolve `tokens[position..]`
    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution>;
}

/// A word/phrase table a resolver can query
pub trait Lexicon: Send + Sync {
    fn find(&self, text: &str) -> Option<String>;
}

/// Dictionary store queried in one direction
pub struct StoreLexicon {
    store: Arc<DictionaryStore>,
    direction: LookupDirection,
}

impl StoreLexicon {
    pub fn new(store: Arc<DictionaryStore>, direction: LookupDirection) -> Self {
        Self { store, direction }
    }
}

impl Lexicon for StoreLexicon {
    fn find(&self, text: &str) -> Option<String> {
        self.store.lookup(text, self.direction).map(str::to_string)
    }
}

/// Hindi → English
pub struct HindiEnglishLexicon(pub Arc<EnglishLexicon>);

impl Lexicon for HindiEnglishLexicon {
    fn find(&self, text: &str) -> Option<String> {
        self.0.to_english(text).map(str::to_string)
    }
}

/// English → Hindi; lowercases and trims surrounding punctuation first
pub struct EnglishHindiLexicon(pub Arc<EnglishLexicon>);

/// Punctuation trimmed from English tokens before lookup
const ENGLISH_TRIM: &[char] = &['.', ',', '!', '?', ';', ':'];

impl Lexicon for EnglishHindiLexicon {
    fn find(&self, text: &str) -> Option<String> {
        let cleaned = text
            .split_whitespace()
            .map(|word| word.trim_matches(ENGLISH_TRIM))
            .filter(|word| !word.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if cleaned.is_empty() {
            return None;
        }
        self.0.to_hindi(&cleaned).map(str::to_string)
    }
}

/// Copies pass-through punctuation verbatim
pub struct PunctuationResolver;

impl Resolver for PunctuationResolver {
    fn name(&self) -> &'static str {
        "punctuation"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let token = tokens.get(position)?;
        is_punctuation(token).then(|| Resolution {
            consumed: 1,
            target: token.to_string(),
            provenance: Provenance::Punctuation,
        })
    }
}

/// Looks up the next `width` tokens joined by single spaces
pub struct PhraseResolver {
    lexicon: Arc<dyn Lexicon>,
    width: usize,
}

impl PhraseResolver {
    pub fn new(lexicon: Arc<dyn Lexicon>, width: usize) -> Self {
        Self { lexicon, width }
    }
}

impl Resolver for PhraseResolver {
    fn name(&self) -> &'static str {
        "phrase"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let window = tokens.get(position..position + self.width)?;
        let target = self.lexicon.find(&window.join(" "))?;
        Some(Resolution::resolved(
            self.width,
            target,
            MatchSource::DictionaryPhrase,
            1.0,
        ))
    }
}

/// Exact single-token lookup
pub struct WordResolver {
    lexicon: Arc<dyn Lexicon>,
}

impl WordResolver {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl Resolver for WordResolver {
    fn name(&self) -> &'static str {
        "word"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let target = self.lexicon.find(tokens.get(position)?)?;
        Some(Resolution::resolved(1, target, MatchSource::Dictionary, 1.0))
    }
}

/// Single-token lookup after trimming a trailing anusvara, then a trailing `ा`
///
/// Catches plural and oblique spellings in the Hindi → English direction.
pub struct TrimmedWordResolver {
    lexicon: Arc<dyn Lexicon>,
}

impl TrimmedWordResolver {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon }
    }
}

impl Resolver for TrimmedWordResolver {
    fn name(&self) -> &'static str {
        "trimmed_word"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let token = tokens.get(position)?;
        let trimmed = token.trim_end_matches('ं').trim_end_matches('ा');
        if trimmed.is_empty() || trimmed == *token {
            return None;
        }
        let target = self.lexicon.find(trimmed)?;
        Some(Resolution::resolved(1, target, MatchSource::Dictionary, 1.0))
    }
}

/// Strips a known suffix and looks up the remaining stem
pub struct StemResolver {
    lexicon: Arc<dyn Lexicon>,
    confidence: f64,
}

impl StemResolver {
    pub fn new(lexicon: Arc<dyn Lexicon>, confidence: f64) -> Self {
        Self { lexicon, confidence }
    }

    /// Candidate stems in suffix order; the stem keeps at least two characters
    pub fn stems(word: &str) -> impl Iterator<Item = &str> {
        let length = word.chars().count();
        HINDI_SUFFIXES.iter().filter_map(move |suffix| {
            let stem = word.strip_suffix(suffix)?;
            (length > suffix.chars().count() + 1).then_some(stem)
        })
    }
}

impl Resolver for StemResolver {
    fn name(&self) -> &'static str {
        "stem"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let word = tokens.get(position)?;
        Self::stems(word).find_map(|stem| {
            let target = self.lexicon.find(stem)?;
            Some(Resolution::resolved(
                1,
                target,
                MatchSource::StemMatch,
                self.confidence,
            ))
        })
    }
}

/// Closest dictionary entry by sequence similarity
///
/// Candidates must beat `floor` to be found and reach `accept` to be used.
pub struct FuzzyResolver {
    store: Arc<DictionaryStore>,
    direction: LookupDirection,
    floor: f64,
    accept: f64,
}

impl FuzzyResolver {
    pub fn new(store: Arc<DictionaryStore>, direction: LookupDirection, floor: f64, accept: f64) -> Self {
        Self {
            store,
            direction,
            floor,
            accept,
        }
    }
}

impl Resolver for FuzzyResolver {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let word = tokens.get(position)?;
        let hit = self.store.fuzzy_match(word, self.direction, self.floor)?;
        if hit.similarity < self.accept {
            tracing::trace!(word, candidate = hit.key, similarity = hit.similarity, "Fuzzy candidate below acceptance");
            return None;
        }
        Some(Resolution::resolved(
            1,
            hit.target,
            MatchSource::FuzzyMatch,
            round2(hit.similarity),
        ))
    }
}

/// Letter-level Devanagari → Ol Chiki fallback; always resolves
pub struct TransliterationResolver {
    confidence: f64,
}

impl TransliterationResolver {
    pub fn new(confidence: f64) -> Self {
        Self { confidence }
    }
}

impl Resolver for TransliterationResolver {
    fn name(&self) -> &'static str {
        "transliteration"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let word = tokens.get(position)?;
        Some(Resolution {
            consumed: 1,
            target: transliterate(word),
            provenance: Provenance::Resolved {
                source: MatchSource::Transliteration,
                confidence: self.confidence,
                note: Some(TRANSLITERATION_NOTE),
            },
        })
    }
}

/// Keeps the token unchanged; always resolves
pub struct PassThroughResolver;

impl Resolver for PassThroughResolver {
    fn name(&self) -> &'static str {
        "pass_through"
    }

    fn resolve(&self, tokens: &[&str], position: usize) -> Option<Resolution> {
        let word = tokens.get(position)?;
        Some(Resolution::resolved(1, *word, MatchSource::Unknown, 0.0))
    }
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = scaled.round();
    // halves go to the even neighbour
    if (rounded - scaled).abs() == 0.5 {
        2.0 * (scaled / 2.0).round() / 100.0
    } else {
        rounded / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<DictionaryStore> {
        Arc::new(DictionaryStore::from_pairs([
            ("घर", "ᱚᱲᱟᱜ"),
            ("लड़का", "ᱠᱚᱲᱟ"),
            ("मेरा नाम", "ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ"),
            ("मेरा नाम है", "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ ᱫᱚ"),
            ("abcdefghij", "ᱟᱵᱪ"),
        ]))
    }

    fn forward(store: &Arc<DictionaryStore>) -> Arc<dyn Lexicon> {
        Arc::new(StoreLexicon::new(store.clone(), LookupDirection::HindiToSantali))
    }

    fn target_of(resolution: Option<Resolution>) -> Option<(usize, String, MatchSource)> {
        resolution.map(|r| match r.provenance {
            Provenance::Resolved { source, .. } => (r.consumed, r.target, source),
            Provenance::Punctuation => (r.consumed, r.target, MatchSource::Unknown),
        })
    }

    #[test]
    fn test_suffixes_longest_first() {
        let lengths: Vec<usize> = HINDI_SUFFIXES.iter().map(|s| s.chars().count()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]), "{:?}", lengths);
    }

    #[test]
    fn test_punctuation() {
        let r = PunctuationResolver.resolve(&["घर", ","], 1).unwrap();
        assert_eq!(r.provenance, Provenance::Punctuation);
        assert_eq!(r.target, ",");
        assert!(PunctuationResolver.resolve(&["घर"], 0).is_none());
    }

    #[test]
    fn test_phrase_widths() {
        let store = store();
        let tokens = ["मेरा", "नाम", "है"];
        let three = PhraseResolver::new(forward(&store), 3);
        let two = PhraseResolver::new(forward(&store), 2);

        assert_eq!(
            target_of(three.resolve(&tokens, 0)),
            Some((3, "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ ᱫᱚ".to_string(), MatchSource::DictionaryPhrase))
        );
        assert_eq!(
            target_of(two.resolve(&tokens, 0)),
            Some((2, "ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ".to_string(), MatchSource::DictionaryPhrase))
        );
        // not enough tokens left for a window
        assert!(three.resolve(&tokens, 1).is_none());
        assert!(two.resolve(&tokens, 2).is_none());
    }

    #[test]
    fn test_word() {
        let store = store();
        let word = WordResolver::new(forward(&store));
        assert_eq!(
            target_of(word.resolve(&["घर"], 0)),
            Some((1, "ᱚᱲᱟᱜ".to_string(), MatchSource::Dictionary))
        );
        assert!(word.resolve(&["घरों"], 0).is_none());
    }

    #[test]
    fn test_stem_strips_suffix() {
        let store = store();
        let stem = StemResolver::new(forward(&store), 0.85);
        let r = stem.resolve(&["घरों"], 0).unwrap();
        assert_eq!(r.target, "ᱚᱲᱟᱜ");
        assert_eq!(
            r.provenance,
            Provenance::Resolved {
                source: MatchSource::StemMatch,
                confidence: 0.85,
                note: None
            }
        );
        // neither "लड़क" nor "लड़" is a key
        assert!(stem.resolve(&["लड़के"], 0).is_none());
    }

    #[test]
    fn test_stem_keeps_two_characters() {
        // "घरा" is three characters; stripping "ा" leaves "घर" (two) → allowed
        assert_eq!(StemResolver::stems("घरा").collect::<Vec<_>>(), vec!["घर"]);
        // "कने": stripping "ने" would leave a single character
        assert!(StemResolver::stems("कने").all(|s| s != "क"));
        // "घरकर": "कर" is tried before the one-character suffixes
        assert_eq!(StemResolver::stems("घरकर").next(), Some("घर"));
    }

    #[test]
    fn test_fuzzy_acceptance_band() {
        let store = store();
        let fuzzy = FuzzyResolver::new(store.clone(), LookupDirection::HindiToSantali, 0.5, 0.75);
        // similarity 0.7: found above the floor but not accepted
        assert!(fuzzy.resolve(&["abcdefgxyz"], 0).is_none());
        // similarity 0.8: accepted
        assert_eq!(
            target_of(fuzzy.resolve(&["abcdefghxy"], 0)),
            Some((1, "ᱟᱵᱪ".to_string(), MatchSource::FuzzyMatch))
        );
    }

    #[test]
    fn test_transliteration_always_resolves() {
        let r = TransliterationResolver::new(0.3).resolve(&["कमल"], 0).unwrap();
        assert_eq!(r.target, "ᱠᱢᱞ");
        assert_eq!(
            r.provenance,
            Provenance::Resolved {
                source: MatchSource::Transliteration,
                confidence: 0.3,
                note: Some(TRANSLITERATION_NOTE)
            }
        );
    }

    #[test]
    fn test_english_lexicons() {
        let lexicon = Arc::new(EnglishLexicon::from_pairs([
            ("घर", "house"),
            ("पानी", "water"),
            ("धन्यवाद", "thank you"),
        ]));
        let en_hi = EnglishHindiLexicon(lexicon.clone());
        assert_eq!(en_hi.find("Water!"), Some("पानी".to_string()));
        assert_eq!(en_hi.find("?"), None);
        assert_eq!(en_hi.find("Thank, you"), Some("धन्यवाद".to_string()));
        assert_eq!(en_hi.find("thank ; you."), Some("धन्यवाद".to_string()));

        let phrase = PhraseResolver::new(Arc::new(en_hi), 2);
        let resolved = phrase.resolve(&["Thank,", "you"], 0).unwrap();
        assert_eq!(resolved.target, "धन्यवाद");
        assert_eq!(resolved.consumed, 2);

        let trimmed = TrimmedWordResolver::new(Arc::new(HindiEnglishLexicon(lexicon)));
        assert_eq!(trimmed.resolve(&["घरा"], 0).map(|r| r.target), Some("house".to_string()));
        assert!(trimmed.resolve(&["घर"], 0).is_none());
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(0.854), 0.85);
        assert_eq!(round2(1.0 / 32.0 * 100.0), 3.12);
        assert_eq!(round2(0.375), 0.38);
    }
}
