//! Translation engine
//!
//! Owns the dictionary store, the English lexicon, one resolution pipeline
//! per supported pair and the whole-text cache. The store is read-only once
//! the engine is built.

use indexmap::IndexMap;
use std::sync::Arc;

use santali_translator_config::{ResolutionConfig, Settings};
use santali_translator_core::{Error, Language, LanguagePair, TranslationResult};

use super::cache::TranslationCache;
use super::pipeline::ResolutionPipeline;
use crate::curated;
use crate::dictionary::{DictionaryStore, EnglishLexicon};

/// Default source code when none is given
const DEFAULT_SOURCE: &str = "hi";
/// Default target code when none is given
const DEFAULT_TARGET: &str = "sat";

/// Dictionary-driven translator for the supported language pairs
pub struct TranslationEngine {
    store: Arc<DictionaryStore>,
    english: Arc<EnglishLexicon>,
    pipelines: Vec<ResolutionPipeline>,
    cache: TranslationCache,
}

impl TranslationEngine {
    /// Build an engine from an already prepared store and lexicon
    pub fn new(
        store: DictionaryStore,
        english: EnglishLexicon,
        resolution: ResolutionConfig,
        cache_capacity: usize,
    ) -> Self {
        let store = Arc::new(store);
        let english = Arc::new(english);
        let pipelines = vec![
            ResolutionPipeline::hindi_to_santali(store.clone(), &resolution),
            ResolutionPipeline::santali_to_hindi(store.clone(), &resolution),
            ResolutionPipeline::hindi_to_english(english.clone()),
            ResolutionPipeline::english_to_hindi(english.clone()),
        ];

        tracing::info!(
            pairs = store.len(),
            english_pairs = english.len(),
            cache_capacity,
            "Translation engine ready"
        );

        Self {
            store,
            english,
            pipelines,
            cache: TranslationCache::new(cache_capacity),
        }
    }

    /// Load the configured dataset and apply the curated tables
    pub fn from_settings(settings: &Settings) -> Self {
        let path = settings.dictionary.resolve_path();
        let mut store = DictionaryStore::load(&path);
        if settings.dictionary.apply_curated {
            curated::apply_overrides(&mut store);
        }
        Self::new(
            store,
            curated::english_lexicon(),
            settings.resolution,
            settings.cache.capacity,
        )
    }

    /// Translate `text` from `source` to `target`
    ///
    /// Codes are case-insensitive and may be language names. Failures are
    /// returned as unsuccessful results.
    pub fn translate(&self, text: &str, source: &str, target: &str) -> TranslationResult {
        if text.trim().is_empty() {
            return TranslationResult::failure(text, Error::EmptyInput);
        }

        let source = normalize_code(source, DEFAULT_SOURCE);
        let target = normalize_code(target, DEFAULT_TARGET);

        if let Some(cached) = self.cache.get(text, &source, &target) {
            tracing::debug!(source = %source, target = %target, "Translation cache hit");
            return cached;
        }

        let Some(pipeline) = LanguagePair::parse(&source, &target).and_then(|p| self.pipeline(p))
        else {
            tracing::debug!(source = %source, target = %target, "Unsupported language pair");
            return TranslationResult::failure(
                text,
                Error::UnsupportedLanguagePair {
                    from: source,
                    to: target,
                },
            );
        };

        let result = pipeline.run(text);
        tracing::debug!(
            pair = %pipeline.pair(),
            confidence = result.confidence,
            matched = result.matched_words,
            total = result.total_words,
            "Translated"
        );

        self.cache.insert(text, &source, &target, result.clone());
        result
    }

    /// Translate every text with the same language pair
    pub fn batch_translate<S: AsRef<str>>(
        &self,
        texts: &[S],
        source: &str,
        target: &str,
    ) -> Vec<TranslationResult> {
        texts
            .iter()
            .map(|text| self.translate(text.as_ref(), source, target))
            .collect()
    }

    fn pipeline(&self, pair: LanguagePair) -> Option<&ResolutionPipeline> {
        self.pipelines.iter().find(|p| p.pair() == pair)
    }

    pub fn dictionary(&self) -> &DictionaryStore {
        &self.store
    }

    pub fn english(&self) -> &EnglishLexicon {
        &self.english
    }

    /// Core languages by code
    pub fn supported_languages(&self) -> IndexMap<&'static str, &'static str> {
        Language::core()
            .iter()
            .map(|language| (language.code(), language.name()))
            .collect()
    }

    pub fn supported_pairs(&self) -> &'static [LanguagePair] {
        &LanguagePair::SUPPORTED
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::debug!("Translation cache cleared");
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }
}

/// Trim and lowercase a language code; empty falls back to `default`
fn normalize_code(code: &str, default: &str) -> String {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        default.to_string()
    } else {
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use santali_translator_core::TranslationMethod;

    fn engine(capacity: usize) -> TranslationEngine {
        let store = DictionaryStore::from_pairs([
            ("पानी", "ᱫᱟᱜ"),
            ("घर", "ᱚᱲᱟᱜ"),
            ("मेरा नाम", "ᱤᱧᱟᱜ ᱧᱩᱛᱩᱢ"),
        ]);
        let english = EnglishLexicon::from_pairs([("पानी", "water")]);
        TranslationEngine::new(store, english, ResolutionConfig::default(), capacity)
    }

    #[test]
    fn test_engine_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TranslationEngine>();
    }

    #[test]
    fn test_empty_input() {
        let engine = engine(10);
        let result = engine.translate("   ", "hi", "sat");
        assert!(!result.success);
        assert!(result.error.unwrap().contains("Empty"));
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_unsupported_pair_not_cached() {
        let engine = engine(10);
        let result = engine.translate("पानी", "en", "fr");
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Unsupported language pair: en -> fr")
        );
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_cached_text_never_answers_unsupported_pair() {
        let engine = engine(10);
        engine.translate("x:पानी", "hi", "sat");
        assert_eq!(engine.cache_len(), 1);

        let result = engine.translate("पानी", "hi", "sat:x");
        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("Unsupported language pair: hi -> sat:x")
        );
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_codes_are_normalized() {
        let engine = engine(10);
        let result = engine.translate("पानी", "  HI ", "");
        assert!(result.success);
        assert_eq!(result.translated_text, "ᱫᱟᱜ");

        let result = engine.translate("पानी", "Hindi", "english");
        assert_eq!(result.translated_text, "water");
    }

    #[test]
    fn test_results_are_cached() {
        let engine = engine(10);
        let first = engine.translate("पानी घर", "hi", "sat");
        assert_eq!(engine.cache_len(), 1);
        let second = engine.translate("पानी घर", "hi", "sat");
        assert_eq!(first, second);
        assert_eq!(engine.cache_len(), 1);

        engine.clear_cache();
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_disabled_cache() {
        let engine = engine(0);
        engine.translate("पानी", "hi", "sat");
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_batch() {
        let engine = engine(10);
        let results = engine.batch_translate(&["मेरा नाम", "", "घर"], "hi", "sat");
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].method, Some(TranslationMethod::ExactPhraseMatch));
        assert!(!results[1].success);
        assert_eq!(results[2].translated_text, "ᱚᱲᱟᱜ");
    }

    #[test]
    fn test_supported_languages() {
        let engine = engine(10);
        let languages = engine.supported_languages();
        assert_eq!(languages.get("hi"), Some(&"Hindi"));
        assert_eq!(languages.get("sat"), Some(&"Santali"));
        assert_eq!(languages.len(), 2);
        assert_eq!(engine.supported_pairs().len(), 4);
    }
}
