//! Hand-verified vocabulary applied on top of the CSV source
//!
//! The CSV data is untrusted; these tables are authoritative. They are
//! applied through [`DictionaryStore::add_word`] once, after loading, so the
//! resolution pipeline only ever sees the store.

mod english;
mod extended;
mod general;

use crate::dictionary::{DictionaryStore, EnglishLexicon};

/// A named, immutable list of Hindi → target pairs
#[derive(Debug, Clone, Copy)]
pub struct CuratedTable {
    pub name: &'static str,
    pub pairs: &'static [(&'static str, &'static str)],
}

/// Hindi → Santali tables in application order; later tables win
pub const SANTALI_TABLES: [CuratedTable; 2] = [
    CuratedTable {
        name: "general",
        pairs: general::GENERAL,
    },
    CuratedTable {
        name: "extended",
        pairs: extended::EXTENDED,
    },
];

/// Hindi → English table
pub const ENGLISH_TABLE: CuratedTable = CuratedTable {
    name: "english",
    pairs: english::HINDI_ENGLISH,
};

/// Overwrite `store` with every curated Hindi → Santali pair
///
/// Returns the number of pairs applied.
pub fn apply_overrides(store: &mut DictionaryStore) -> usize {
    let mut applied = 0;
    for table in &SANTALI_TABLES {
        for (hindi, santali) in table.pairs {
            store.add_word(hindi, santali);
        }
        applied += table.pairs.len();
        tracing::debug!(table = table.name, pairs = table.pairs.len(), "Applied curated table");
    }
    tracing::info!(applied, unique_pairs = store.len(), "Curated overrides applied");
    applied
}

/// Lexicon built from the curated Hindi → English table
pub fn english_lexicon() -> EnglishLexicon {
    EnglishLexicon::from_pairs(ENGLISH_TABLE.pairs.iter().copied())
}

/// Keys appearing more than once in `pairs`
pub fn duplicate_keys(pairs: &[(&'static str, &'static str)]) -> Vec<&'static str> {
    let mut seen = std::collections::HashSet::new();
    pairs
        .iter()
        .filter(|(key, _)| !seen.insert(*key))
        .map(|(key, _)| *key)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use santali_translator_core::LookupDirection;

    #[test]
    fn test_tables_have_no_duplicate_keys() {
        for table in SANTALI_TABLES.iter().chain([&ENGLISH_TABLE]) {
            let dups = duplicate_keys(table.pairs);
            assert!(dups.is_empty(), "{} table repeats {:?}", table.name, dups);
        }
    }

    #[test]
    fn test_duplicate_keys_helper() {
        const PAIRS: &[(&str, &str)] = &[("क", "1"), ("ख", "2"), ("क", "3")];
        assert_eq!(duplicate_keys(PAIRS), vec!["क"]);
    }

    #[test]
    fn test_santali_values_are_clean() {
        for table in &SANTALI_TABLES {
            for (hindi, santali) in table.pairs {
                assert!(
                    !crate::dictionary::is_garbled_santali(santali),
                    "{}: {} -> {}",
                    table.name,
                    hindi,
                    santali
                );
            }
        }
    }

    #[test]
    fn test_overrides_beat_existing_entries() {
        let mut store = DictionaryStore::from_pairs([("नमस्ते", "ᱜᱟᱲᱵᱚᱲ"), ("अनोखा", "ᱟᱱᱳᱠᱷᱟ")]);
        apply_overrides(&mut store);
        assert_eq!(store.lookup("नमस्ते", LookupDirection::HindiToSantali), Some("ᱡᱚᱦᱟᱨ"));
        assert_eq!(store.lookup("अनोखा", LookupDirection::HindiToSantali), Some("ᱟᱱᱳᱠᱷᱟ"));
    }

    #[test]
    fn test_extended_table_wins_over_general() {
        let mut store = DictionaryStore::new();
        apply_overrides(&mut store);
        for (hindi, santali) in extended::EXTENDED {
            assert_eq!(store.lookup(hindi, LookupDirection::HindiToSantali), Some(*santali));
        }
    }

    #[test]
    fn test_application_is_reproducible() {
        let mut a = DictionaryStore::from_pairs([("पानी", "ᱯᱟᱱᱤ")]);
        let mut b = DictionaryStore::from_pairs([("घर", "ᱜᱷᱚᱨ ᱜᱷᱚᱨ")]);
        apply_overrides(&mut a);
        apply_overrides(&mut b);
        for table in &SANTALI_TABLES {
            for (hindi, _) in table.pairs {
                assert_eq!(
                    a.lookup(hindi, LookupDirection::HindiToSantali),
                    b.lookup(hindi, LookupDirection::HindiToSantali)
                );
            }
        }
    }

    #[test]
    fn test_english_lexicon() {
        let lexicon = english_lexicon();
        assert_eq!(lexicon.to_english("पानी"), Some("water"));
        assert_eq!(lexicon.to_hindi("Water"), Some("पानी"));
        assert!(!lexicon.is_empty());
    }
}
