//! Dictionary store behaviour against on-disk CSV sources

use std::fs;

use santali_translator_core::LookupDirection;
use santali_translator_text_processing::{DictionaryError, DictionarySource, DictionaryStore};
use tempfile::TempDir;

const FIXTURE: &str = "\
Hindi,Santali,santali_olchiki
पानी,दाक,ᱫᱟᱜ
पानीदार,,ᱫᱟᱜᱟᱱ
पाप,पाप,ᱯᱟᱯ
घर,ओड़ाक,ᱚᱲᱟᱜ
किताब,,ᱯᱚᱛᱷᱤ x
बहुत अच्छा,,ᱟᱹᱰᱤ ᱵᱟᱹᱲᱤᱡ
";

fn load_fixture(dir: &TempDir) -> DictionaryStore {
    let path = dir.path().join("dict.csv");
    fs::write(&path, FIXTURE).unwrap();
    DictionaryStore::try_load(&path).unwrap()
}

#[test]
fn olchiki_column_is_preferred() {
    let dir = TempDir::new().unwrap();
    let store = load_fixture(&dir);

    assert_eq!(store.lookup("पानी", LookupDirection::HindiToSantali), Some("ᱫᱟᱜ"));
    assert_eq!(store.lookup("ᱚᱲᱟᱜ", LookupDirection::SantaliToHindi), Some("घर"));
    // garbled Santali value is rejected
    assert_eq!(store.lookup("किताब", LookupDirection::HindiToSantali), None);
    assert_eq!(store.len(), 5);
}

#[test]
fn add_word_updates_both_directions() {
    let dir = TempDir::new().unwrap();
    let mut store = load_fixture(&dir);

    store.add_word("  नदी ", "ᱜᱟᱰᱟ");
    assert_eq!(store.lookup("नदी", LookupDirection::HindiToSantali), Some("ᱜᱟᱰᱟ"));
    assert_eq!(store.lookup("ᱜᱟᱰᱟ", LookupDirection::SantaliToHindi), Some("नदी"));

    store.add_word("पानी", "ᱫᱟᱜ ᱫᱟᱜ");
    assert_eq!(store.lookup("पानी", LookupDirection::HindiToSantali), Some("ᱫᱟᱜ ᱫᱟᱜ"));
    assert_eq!(store.len(), 6);
}

#[test]
fn search_and_prefix() {
    let dir = TempDir::new().unwrap();
    let mut store = load_fixture(&dir);

    let hits = store.search("पानी", LookupDirection::HindiToSantali);
    assert_eq!(hits, vec![("पानी", "ᱫᱟᱜ"), ("पानीदार", "ᱫᱟᱜᱟᱱ")]);

    let hits = store.search("ᱵᱟᱹᱲᱤᱡ", LookupDirection::SantaliToHindi);
    assert_eq!(hits, vec![("बहुत अच्छा", "ᱟᱹᱰᱤ ᱵᱟᱹᱲᱤᱡ")]);

    assert!(store.search("  ", LookupDirection::HindiToSantali).is_empty());

    let prefixed: Vec<&str> = store
        .search_prefix("पा", 10)
        .into_iter()
        .map(|(hindi, _)| hindi)
        .collect();
    assert_eq!(prefixed, vec!["पानी", "पानीदार", "पाप"]);
    assert_eq!(store.search_prefix("पा", 1).len(), 1);

    store.add_word("पालक", "ᱯᱟᱞᱚᱠ");
    assert_eq!(store.search_prefix("पा", 10).len(), 4);
    assert!(store.search_prefix("झ", 10).is_empty());
}

#[test]
fn export_then_reload_preserves_pairs() {
    let dir = TempDir::new().unwrap();
    let mut store = load_fixture(&dir);
    store.add_word("नदी", "ᱜᱟᱰᱟ");

    let exported = dir.path().join("out").join("export.csv");
    store.export_csv(&exported).unwrap();

    let reloaded = DictionaryStore::try_load(&exported).unwrap();
    assert_eq!(reloaded.source(), &DictionarySource::Csv(exported.clone()));
    let original: Vec<_> = store.entries().collect();
    let restored: Vec<_> = reloaded.entries().collect();
    assert_eq!(original, restored);
}

#[test]
fn missing_file_is_an_error_for_try_load() {
    let dir = TempDir::new().unwrap();
    let err = DictionaryStore::try_load(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, DictionaryError::NotFound(_)));

    let store = DictionaryStore::load(dir.path().join("nope.csv"));
    assert_eq!(store.source(), &DictionarySource::Seed);
    assert!(!store.is_empty());
}

#[test]
fn header_without_santali_column_falls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("english.csv");
    fs::write(&path, "hindi,english\nपानी,water\n").unwrap();

    assert!(matches!(
        DictionaryStore::try_load(&path),
        Err(DictionaryError::MissingColumn(_))
    ));
    assert_eq!(DictionaryStore::load(&path).source(), &DictionarySource::Seed);
}
