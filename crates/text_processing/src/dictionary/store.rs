//! Hindi ↔ Santali dictionary store

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use santali_translator_core::LookupDirection;

use super::loader::{read_csv, LoadReport};
use super::seed::SEED;
use super::similarity::similarity;
use crate::error::{DictionaryError, Result};
use crate::normalize::{normalize, to_nfd};

pub use santali_translator_config::constants::dictionary::SEARCH_LIMIT;

/// Where the store's initial contents came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "path")]
pub enum DictionarySource {
    Csv(PathBuf),
    Seed,
    Empty,
}

/// Diagnostics exposed to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    /// Distinct Hindi forms currently in the forward table
    pub unique_pairs: usize,
    /// CSV rows accepted into the table at load time
    pub total_rows_loaded: usize,
    pub duplicates_skipped: usize,
    pub rows_rejected: usize,
    pub source: DictionarySource,
}

/// Best fuzzy candidate for a query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch<'a> {
    /// Matched key in the scanned table
    pub key: &'a str,
    /// Value the key maps to
    pub target: &'a str,
    pub similarity: f64,
}

/// Bidirectional Hindi ↔ Santali word table
///
/// Four indexes are kept in step on every insert:
/// - forward: normalized Hindi → Santali
/// - reverse: normalized Santali → Hindi
/// - lowercase: lowercased Hindi → canonical Hindi
/// - prefixes: every prefix of a Hindi form → Hindi forms sharing it
///
/// There is no removal. Forward and reverse maps iterate in insertion order.
#[derive(Debug, Clone)]
pub struct DictionaryStore {
    forward: IndexMap<String, String>,
    reverse: IndexMap<String, String>,
    lowercase: HashMap<String, String>,
    prefixes: HashMap<String, IndexSet<String>>,
    report: LoadReport,
    source: DictionarySource,
}

impl Default for DictionaryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DictionaryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
            lowercase: HashMap::new(),
            prefixes: HashMap::new(),
            report: LoadReport::default(),
            source: DictionarySource::Empty,
        }
    }

    /// Store holding only the built-in seed table
    pub fn seed() -> Self {
        let mut store = Self::from_pairs(SEED.iter().copied());
        store.source = DictionarySource::Seed;
        store
    }

    /// Build a store from in-memory pairs, later pairs overwriting earlier ones
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut store = Self::new();
        for (hindi, santali) in pairs {
            store.add_word(hindi, santali);
        }
        store
    }

    /// Load from a CSV file, falling back to the seed table on any failure
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Dictionary source unavailable, using built-in seed table"
                );
                Self::seed()
            }
        }
    }

    /// Load from a CSV file, propagating failures
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DictionaryError::NotFound(path.display().to_string()));
        }
        let mut store = Self::from_reader(File::open(path)?)?;
        store.source = DictionarySource::Csv(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            rows_loaded = store.report.rows_loaded,
            duplicates_skipped = store.report.duplicates_skipped,
            rows_rejected = store.report.rows_rejected,
            "Loaded dictionary"
        );
        Ok(store)
    }

    /// Load from any CSV reader
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self> {
        let table = read_csv(reader)?;
        let mut store = Self::new();
        for (hindi, santali) in &table.pairs {
            store.insert(hindi.clone(), santali.clone());
        }
        store.report = table.report;
        Ok(store)
    }

    /// Insert or overwrite a pair, updating every index
    ///
    /// Pairs with an empty side after normalization are ignored.
    pub fn add_word(&mut self, hindi: &str, santali: &str) {
        let hindi = normalize(hindi);
        let santali = normalize(santali);
        if hindi.is_empty() || santali.is_empty() {
            tracing::debug!("Ignoring dictionary pair with an empty side");
            return;
        }
        self.insert(hindi, santali);
    }

    fn insert(&mut self, hindi: String, santali: String) {
        for (end, c) in hindi.char_indices() {
            let prefix = &hindi[..end + c.len_utf8()];
            self.prefixes
                .entry(prefix.to_string())
                .or_default()
                .insert(hindi.clone());
        }
        self.lowercase.insert(hindi.to_lowercase(), hindi.clone());
        self.reverse.insert(santali.clone(), hindi.clone());
        self.forward.insert(hindi, santali);
    }

    /// Look up a word in the given direction
    ///
    /// Hindi → Santali tries the normalized form, then a case-insensitive
    /// match, then the NFD form of the raw input. Santali → Hindi only tries
    /// the normalized form.
    pub fn lookup(&self, word: &str, direction: LookupDirection) -> Option<&str> {
        match direction {
            LookupDirection::HindiToSantali => self.lookup_forward(word),
            LookupDirection::SantaliToHindi => {
                self.reverse.get(&normalize(word)).map(String::as_str)
            }
        }
    }

    fn lookup_forward(&self, word: &str) -> Option<&str> {
        let key = normalize(word);
        if let Some(value) = self.forward.get(&key) {
            return Some(value);
        }
        if let Some(value) = self
            .lowercase
            .get(&key.to_lowercase())
            .and_then(|canonical| self.forward.get(canonical))
        {
            return Some(value);
        }
        self.forward.get(&to_nfd(word.trim())).map(String::as_str)
    }

    /// Best entry whose similarity to `word` is strictly above `threshold`
    ///
    /// Scans the table for `direction` in insertion order. A case-insensitive
    /// exact key match returns immediately with similarity 1.0; otherwise the
    /// first candidate reaching the best score wins.
    pub fn fuzzy_match(
        &self,
        word: &str,
        direction: LookupDirection,
        threshold: f64,
    ) -> Option<FuzzyMatch<'_>> {
        let query = normalize(word).to_lowercase();
        if query.is_empty() {
            return None;
        }

        let mut best: Option<FuzzyMatch<'_>> = None;
        let mut best_score = threshold;
        for (key, target) in self.table(direction) {
            let key_lower = key.to_lowercase();
            if key_lower == query {
                return Some(FuzzyMatch {
                    key,
                    target,
                    similarity: 1.0,
                });
            }
            let score = similarity(&query, &key_lower);
            if score > best_score {
                best_score = score;
                best = Some(FuzzyMatch {
                    key,
                    target,
                    similarity: score,
                });
            }
        }
        best
    }

    /// Case-insensitive substring search, at most [`SEARCH_LIMIT`] results
    ///
    /// Results are `(hindi, santali)` pairs in table order, whichever side
    /// was searched.
    pub fn search(&self, query: &str, direction: LookupDirection) -> Vec<(&str, &str)> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        self.table(direction)
            .filter(|(key, _)| key.to_lowercase().contains(&query))
            .take(SEARCH_LIMIT)
            .map(|(key, value)| match direction {
                LookupDirection::HindiToSantali => (key, value),
                LookupDirection::SantaliToHindi => (value, key),
            })
            .collect()
    }

    /// Hindi entries starting with `prefix`, in first-inserted order
    pub fn search_prefix(&self, prefix: &str, limit: usize) -> Vec<(&str, &str)> {
        let prefix = normalize(prefix);
        let Some(words) = self.prefixes.get(&prefix) else {
            return Vec::new();
        };
        words
            .iter()
            .filter_map(|hindi| {
                self.forward
                    .get_key_value(hindi)
                    .map(|(k, v)| (k.as_str(), v.as_str()))
            })
            .take(limit)
            .collect()
    }

    fn table(&self, direction: LookupDirection) -> impl Iterator<Item = (&str, &str)> {
        let map = match direction {
            LookupDirection::HindiToSantali => &self.forward,
            LookupDirection::SantaliToHindi => &self.reverse,
        };
        map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Forward pairs in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table(LookupDirection::HindiToSantali)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            unique_pairs: self.forward.len(),
            total_rows_loaded: self.report.rows_loaded,
            duplicates_skipped: self.report.duplicates_skipped,
            rows_rejected: self.report.rows_rejected,
            source: self.source.clone(),
        }
    }

    /// Write every forward pair to a CSV file the loader can read back
    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["hindi", "santali_olchiki"])?;
        for (hindi, santali) in self.entries() {
            writer.write_record([hindi, santali])?;
        }
        writer.flush()?;

        tracing::info!(path = %path.display(), pairs = self.len(), "Exported dictionary");
        Ok(())
    }

    /// Number of Hindi forms indexed under `prefix`
    #[cfg(test)]
    fn prefix_count(&self, prefix: &str) -> usize {
        self.prefixes.get(prefix).map_or(0, IndexSet::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LookupDirection::{HindiToSantali as Forward, SantaliToHindi as Reverse};

    fn fixture() -> DictionaryStore {
        DictionaryStore::from_pairs([
            ("पानी", "ᱫᱟᱜ"),
            ("घर", "ᱚᱲᱟᱜ"),
            ("घड़ी", "ᱜᱷᱚᱲᱤ"),
            ("मेरा नाम", "ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ"),
            ("Delhi", "ᱰᱮᱞᱷᱤ"),
        ])
    }

    #[test]
    fn test_seed_lookup() {
        let store = DictionaryStore::seed();
        assert_eq!(store.lookup("नमस्ते", Forward), Some("जोहार"));
        assert_eq!(store.lookup("तुरु", Reverse), Some("पानी"));
        // several greetings share one value; the last one written owns it
        assert_eq!(store.lookup("जोहार", Reverse), Some("आपका स्वागत है"));
        assert_eq!(store.lookup("अपरिचित", Forward), None);
        assert_eq!(store.source(), &DictionarySource::Seed);
    }

    #[test]
    fn test_seed_has_no_duplicate_keys() {
        assert_eq!(DictionaryStore::seed().len(), SEED.len());
    }

    #[test]
    fn test_lookup_normalizes_input() {
        let store = fixture();
        assert_eq!(store.lookup("  मेरा   नाम ", Forward), Some("ᱤᱧᱟᱜ ᱥᱮᱫᱟᱭ"));
        assert_eq!(store.lookup("DELHI", Forward), Some("ᱰᱮᱞᱷᱤ"));
    }

    #[test]
    fn test_reverse_lookup_is_exact_only() {
        let store = DictionaryStore::from_pairs([("सड़क", "Road")]);
        assert_eq!(store.lookup("सड़क", Forward), Some("Road"));
        assert_eq!(store.lookup("Road", Reverse), Some("सड़क"));
        assert_eq!(store.lookup("road", Reverse), None);
    }

    #[test]
    fn test_add_word_round_trip_and_overwrite() {
        let mut store = fixture();
        store.add_word("नया", "ᱱᱟᱣᱟ");
        assert_eq!(store.lookup("नया", Forward), Some("ᱱᱟᱣᱟ"));
        assert_eq!(store.lookup("ᱱᱟᱣᱟ", Reverse), Some("नया"));

        store.add_word("पानी", "ᱫᱟᱜ ᱫᱟᱜ");
        assert_eq!(store.lookup("पानी", Forward), Some("ᱫᱟᱜ ᱫᱟᱜ"));
        assert_eq!(store.lookup("ᱫᱟᱜ ᱫᱟᱜ", Reverse), Some("पानी"));
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_add_word_ignores_empty_side() {
        let mut store = DictionaryStore::new();
        store.add_word("  ", "ᱫᱟᱜ");
        store.add_word("पानी", "");
        assert!(store.is_empty());
    }

    #[test]
    fn test_prefix_index_tracks_add_word() {
        let mut store = fixture();
        assert_eq!(store.prefix_count("घ"), 2);
        store.add_word("घड़ा", "ᱜᱷᱚᱲᱟ");
        assert_eq!(store.prefix_count("घ"), 3);
        assert_eq!(
            store.search_prefix("घड़", 10),
            vec![("घड़ी", "ᱜᱷᱚᱲᱤ"), ("घड़ा", "ᱜᱷᱚᱲᱟ")]
        );
        assert_eq!(store.search_prefix("घड़", 1).len(), 1);
        assert!(store.search_prefix("क", 10).is_empty());
    }

    #[test]
    fn test_fuzzy_exact_case_insensitive() {
        let store = fixture();
        let hit = store.fuzzy_match("delhi", Forward, 0.5).unwrap();
        assert_eq!(hit.target, "ᱰᱮᱞᱷᱤ");
        assert_eq!(hit.similarity, 1.0);
    }

    #[test]
    fn test_fuzzy_threshold_is_strict() {
        let store = DictionaryStore::from_pairs([("abcdefghij", "ᱟ ᱵ")]);
        // similarity exactly 0.7
        assert!(store.fuzzy_match("abcdefgxyz", Forward, 0.7).is_none());
        let hit = store.fuzzy_match("abcdefgxyz", Forward, 0.69).unwrap();
        assert!((hit.similarity - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_fuzzy_picks_best_score() {
        let store = fixture();
        let hit = store.fuzzy_match("पानीी", Forward, 0.5).unwrap();
        assert_eq!(hit.key, "पानी");
        assert!(hit.similarity > 0.8);
    }

    #[test]
    fn test_fuzzy_reverse_direction() {
        let store = fixture();
        let hit = store.fuzzy_match("ᱚᱲᱟᱜᱮ", Reverse, 0.65).unwrap();
        assert_eq!(hit.target, "घर");
    }

    #[test]
    fn test_search() {
        let store = fixture();
        assert_eq!(store.search("घ", Forward).len(), 2);
        assert_eq!(store.search("delh", Forward), vec![("Delhi", "ᱰᱮᱞᱷᱤ")]);
        assert_eq!(store.search("ᱫᱟᱜ", Reverse), vec![("पानी", "ᱫᱟᱜ")]);
        assert!(store.search("  ", Forward).is_empty());
    }

    #[test]
    fn test_search_limit() {
        let words: Vec<(String, String)> = (0..30)
            .map(|i| (format!("शब्द{}", i), format!("ᱥᱟᱵᱫ{}", i)))
            .collect();
        let store =
            DictionaryStore::from_pairs(words.iter().map(|(h, s)| (h.as_str(), s.as_str())));
        let results = store.search("शब्द", Forward);
        assert_eq!(results.len(), SEARCH_LIMIT);
        assert_eq!(results[0].0, "शब्द0");
    }

    #[test]
    fn test_stats_for_in_memory_store() {
        let stats = fixture().stats();
        assert_eq!(stats.unique_pairs, 5);
        assert_eq!(stats.total_rows_loaded, 0);
        assert_eq!(stats.source, DictionarySource::Empty);
    }
}
