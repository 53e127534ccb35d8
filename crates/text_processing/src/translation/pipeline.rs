//! Ordered resolver pipelines, one per language pair

use std::sync::Arc;

use santali_translator_config::ResolutionConfig;
use santali_translator_core::{
    Language, LanguagePair, LookupDirection, MatchSource, TranslationMethod, TranslationResult,
    WordMapping,
};

use super::resolver::{
    round2, EnglishHindiLexicon, FuzzyResolver, HindiEnglishLexicon, Lexicon, PassThroughResolver,
    PhraseResolver, Provenance, PunctuationResolver, Resolver, StemResolver, StoreLexicon,
    TransliterationResolver, TrimmedWordResolver, WordResolver,
};
use crate::dictionary::{DictionaryStore, EnglishLexicon};
use crate::tokenizer::{clean_text, tokenize_sentences, tokenize_words};

/// Strategies tried in order at every token position
pub struct ResolutionPipeline {
    pair: LanguagePair,
    /// Forward store for the whole-input lookup, Hindi → Santali only
    whole_phrase: Option<Arc<DictionaryStore>>,
    resolvers: Vec<Box<dyn Resolver>>,
}

impl ResolutionPipeline {
    /// Hindi → Santali: phrase, word, stem, fuzzy, then transliteration
    pub fn hindi_to_santali(store: Arc<DictionaryStore>, config: &ResolutionConfig) -> Self {
        let lexicon: Arc<dyn Lexicon> = Arc::new(StoreLexicon::new(
            store.clone(),
            LookupDirection::HindiToSantali,
        ));
        Self {
            pair: LanguagePair::new(Language::Hindi, Language::Santali),
            whole_phrase: Some(store.clone()),
            resolvers: vec![
                Box::new(PunctuationResolver),
                Box::new(PhraseResolver::new(lexicon.clone(), 3)),
                Box::new(PhraseResolver::new(lexicon.clone(), 2)),
                Box::new(WordResolver::new(lexicon.clone())),
                Box::new(StemResolver::new(lexicon, config.stem_confidence)),
                Box::new(FuzzyResolver::new(
                    store,
                    LookupDirection::HindiToSantali,
                    config.fuzzy_floor,
                    config.fuzzy_accept,
                )),
                Box::new(TransliterationResolver::new(config.transliteration_confidence)),
            ],
        }
    }

    /// Santali → Hindi: exact reverse lookup, fuzzy, then pass-through
    pub fn santali_to_hindi(store: Arc<DictionaryStore>, config: &ResolutionConfig) -> Self {
        let lexicon: Arc<dyn Lexicon> = Arc::new(StoreLexicon::new(
            store.clone(),
            LookupDirection::SantaliToHindi,
        ));
        Self {
            pair: LanguagePair::new(Language::Santali, Language::Hindi),
            whole_phrase: None,
            resolvers: vec![
                Box::new(PunctuationResolver),
                Box::new(WordResolver::new(lexicon)),
                Box::new(FuzzyResolver::new(
                    store,
                    LookupDirection::SantaliToHindi,
                    config.reverse_fuzzy_floor,
                    config.reverse_fuzzy_floor,
                )),
                Box::new(PassThroughResolver),
            ],
        }
    }

    pub fn hindi_to_english(lexicon: Arc<EnglishLexicon>) -> Self {
        let lexicon: Arc<dyn Lexicon> = Arc::new(HindiEnglishLexicon(lexicon));
        Self {
            pair: LanguagePair::new(Language::Hindi, Language::English),
            whole_phrase: None,
            resolvers: vec![
                Box::new(PunctuationResolver),
                Box::new(PhraseResolver::new(lexicon.clone(), 2)),
                Box::new(WordResolver::new(lexicon.clone())),
                Box::new(TrimmedWordResolver::new(lexicon)),
                Box::new(PassThroughResolver),
            ],
        }
    }

    pub fn english_to_hindi(lexicon: Arc<EnglishLexicon>) -> Self {
        let lexicon: Arc<dyn Lexicon> = Arc::new(EnglishHindiLexicon(lexicon));
        Self {
            pair: LanguagePair::new(Language::English, Language::Hindi),
            whole_phrase: None,
            resolvers: vec![
                Box::new(PunctuationResolver),
                Box::new(PhraseResolver::new(lexicon.clone(), 2)),
                Box::new(WordResolver::new(lexicon)),
                Box::new(PassThroughResolver),
            ],
        }
    }

    pub fn pair(&self) -> LanguagePair {
        self.pair
    }

    /// Resolve `text` into a successful result
    pub fn run(&self, text: &str) -> TranslationResult {
        let cleaned = clean_text(text);

        if let Some(store) = &self.whole_phrase {
            if let Some(target) = store.lookup(&cleaned, LookupDirection::HindiToSantali) {
                tracing::debug!(text = %cleaned, "Whole input matched a dictionary entry");
                let mapping = WordMapping::new(cleaned.as_str(), target, MatchSource::Dictionary, 1.0);
                return self.result(
                    cleaned.clone(),
                    target.to_string(),
                    100.0,
                    TranslationMethod::ExactPhraseMatch,
                    vec![mapping],
                    1,
                    1,
                );
            }
        }

        let mut sentences = Vec::new();
        let mut mappings = Vec::new();
        let mut matched = 0;
        let mut total = 0;

        for sentence in tokenize_sentences(&cleaned) {
            let tokens = tokenize_words(sentence);
            let mut output: Vec<String> = Vec::with_capacity(tokens.len());
            let mut position = 0;

            while position < tokens.len() {
                let Some((tier, resolution)) = self
                    .resolvers
                    .iter()
                    .find_map(|r| r.resolve(&tokens, position).map(|res| (r.name(), res)))
                else {
                    // every pipeline ends in a tier that always resolves
                    output.push(tokens[position].to_string());
                    position += 1;
                    continue;
                };

                let consumed = resolution.consumed.max(1);
                if let Provenance::Resolved {
                    source,
                    confidence,
                    note,
                } = resolution.provenance
                {
                    let span = tokens[position..position + consumed].join(" ");
                    tracing::trace!(token = %span, tier, target = %resolution.target, "Resolved");
                    total += consumed;
                    if source.counts_as_match() {
                        matched += consumed;
                    }
                    let mut mapping =
                        WordMapping::new(span, resolution.target.as_str(), source, confidence);
                    if let Some(note) = note {
                        mapping = mapping.with_note(note);
                    }
                    mappings.push(mapping);
                }
                output.push(resolution.target);
                position += consumed;
            }

            sentences.push(output.join(" "));
        }

        let confidence = if total > 0 {
            round2(matched as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        self.result(
            cleaned,
            sentences.join(" "),
            confidence,
            TranslationMethod::WordByWord,
            mappings,
            matched,
            total,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn result(
        &self,
        source_text: String,
        translated_text: String,
        confidence: f64,
        method: TranslationMethod,
        word_mappings: Vec<WordMapping>,
        matched_words: usize,
        total_words: usize,
    ) -> TranslationResult {
        TranslationResult {
            success: true,
            source_text,
            source_language: Some(self.pair.source),
            translated_text,
            target_language: Some(self.pair.target),
            confidence,
            method: Some(method),
            word_mappings,
            matched_words,
            total_words,
            error: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Arc<DictionaryStore> {
        Arc::new(DictionaryStore::from_pairs([
            ("मेरा", "ᱤᱧᱟᱜ"),
            ("नाम", "ᱧᱩᱛᱩᱢ"),
            ("मेरा नाम", "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ"),
            ("पानी", "ᱫᱟᱜ"),
            ("घर", "ᱚᱲᱟᱜ"),
            ("अच्छा है", "ᱵᱟᱹᱲᱤᱡ ᱠᱟᱱᱟ"),
        ]))
    }

    fn english() -> Arc<EnglishLexicon> {
        Arc::new(EnglishLexicon::from_pairs([
            ("पानी", "water"),
            ("घर", "house"),
            ("बड़ा", "big"),
            ("धन्यवाद", "thank you"),
        ]))
    }

    fn hi_sat() -> ResolutionPipeline {
        ResolutionPipeline::hindi_to_santali(store(), &ResolutionConfig::default())
    }

    #[test]
    fn test_whole_phrase_short_circuit() {
        let result = hi_sat().run("  मेरा   नाम ");
        assert_eq!(result.translated_text, "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ");
        assert_eq!(result.method, Some(TranslationMethod::ExactPhraseMatch));
        assert_eq!(result.confidence, 100.0);
        assert_eq!((result.matched_words, result.total_words), (1, 1));
        assert_eq!(result.word_mappings.len(), 1);
        assert_eq!(result.word_mappings[0].match_source, MatchSource::Dictionary);
        assert_eq!(result.source_text, "मेरा नाम");
    }

    #[test]
    fn test_phrase_inside_sentence() {
        let result = hi_sat().run("मेरा नाम पानी");
        assert_eq!(result.method, Some(TranslationMethod::WordByWord));
        assert_eq!(result.translated_text, "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ ᱫᱟᱜ");
        assert_eq!(result.word_mappings[0].match_source, MatchSource::DictionaryPhrase);
        assert_eq!((result.matched_words, result.total_words), (3, 3));
        assert_eq!(result.confidence, 100.0);
    }

    #[test]
    fn test_sentences_and_punctuation() {
        let result = hi_sat().run("पानी , घर। घरों");
        // the danda splits sentences, the comma is copied through
        assert_eq!(result.translated_text, "ᱫᱟᱜ , ᱚᱲᱟᱜ ᱚᱲᱟᱜ");
        assert_eq!(result.total_words, 3);
        assert_eq!(result.word_mappings[2].match_source, MatchSource::StemMatch);
        assert_eq!(result.word_mappings[2].confidence, 0.85);
    }

    #[test]
    fn test_transliteration_counts_total_only() {
        let result = hi_sat().run("पानी कमल");
        assert_eq!(result.translated_text, "ᱫᱟᱜ ᱠᱢᱞ");
        assert_eq!((result.matched_words, result.total_words), (1, 2));
        assert_eq!(result.confidence, 50.0);
        let last = &result.word_mappings[1];
        assert_eq!(last.match_source, MatchSource::Transliteration);
        assert!(last.note.is_some());
    }

    #[test]
    fn test_santali_to_hindi() {
        let pipeline =
            ResolutionPipeline::santali_to_hindi(store(), &ResolutionConfig::default());
        let result = pipeline.run("ᱫᱟᱜ ᱚᱲᱟᱜ ᱥᱮᱛᱟ");
        assert_eq!(result.translated_text, "पानी घर ᱥᱮᱛᱟ");
        assert_eq!(result.source_language, Some(Language::Santali));
        assert_eq!(result.word_mappings[2].match_source, MatchSource::Unknown);
        assert_eq!(result.confidence, 66.67);
    }

    fn santali_key(head: &str, head_len: usize, tail: &str, tail_len: usize) -> String {
        format!("{}{}", head.repeat(head_len), tail.repeat(tail_len))
    }

    #[test]
    fn test_santali_to_hindi_fuzzy_tier() {
        let near = santali_key("ᱚ", 20, "ᱠ", 10);
        let edge = santali_key("ᱤ", 13, "ᱠ", 7);
        let store = Arc::new(DictionaryStore::from_pairs([
            ("दूर", near.as_str()),
            ("पास", edge.as_str()),
        ]));
        let pipeline = ResolutionPipeline::santali_to_hindi(store, &ResolutionConfig::default());

        // 40 of 60 characters shared
        let above = santali_key("ᱚ", 20, "ᱢ", 10);
        let result = pipeline.run(&above);
        assert_eq!(result.translated_text, "दूर");
        assert_eq!(result.word_mappings[0].match_source, MatchSource::FuzzyMatch);
        assert_eq!(result.word_mappings[0].confidence, 0.67);
        assert_eq!((result.matched_words, result.total_words), (1, 1));
        assert_eq!(result.confidence, 100.0);

        // 26 of 40 characters shared is not above the floor
        let at_floor = santali_key("ᱤ", 13, "ᱢ", 7);
        let result = pipeline.run(&at_floor);
        assert_eq!(result.translated_text, at_floor);
        assert_eq!(result.word_mappings[0].match_source, MatchSource::Unknown);
        assert_eq!(result.word_mappings[0].confidence, 0.0);
        assert_eq!((result.matched_words, result.total_words), (0, 1));
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_hindi_to_english() {
        let pipeline = ResolutionPipeline::hindi_to_english(english());
        let result = pipeline.run("पानी घरां किताब");
        assert_eq!(result.translated_text, "water house किताब");
        assert_eq!(result.target_language, Some(Language::English));
        assert_eq!((result.matched_words, result.total_words), (2, 3));
    }

    #[test]
    fn test_english_to_hindi() {
        let pipeline = ResolutionPipeline::english_to_hindi(english());
        let result = pipeline.run("Thank you, big House");
        assert_eq!(result.translated_text, "धन्यवाद बड़ा घर");
        assert_eq!(result.word_mappings[0].match_source, MatchSource::DictionaryPhrase);
        assert_eq!(result.confidence, 100.0);

        let result = pipeline.run("Thank, you");
        assert_eq!(result.translated_text, "धन्यवाद");
        assert_eq!((result.matched_words, result.total_words), (2, 2));
    }

    #[test]
    fn test_no_tokens() {
        let result = hi_sat().run("।");
        assert_eq!(result.total_words, 0);
        assert_eq!(result.confidence, 0.0);
        assert!(result.translated_text.is_empty());
    }
}
