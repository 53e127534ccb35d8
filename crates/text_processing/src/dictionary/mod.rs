//! Dictionary storage, loading and matching
//!
//! - [`DictionaryStore`]: Hindi ↔ Santali tables loaded from CSV
//! - [`EnglishLexicon`]: Hindi ↔ English table
//! - [`similarity`]: sequence similarity used for fuzzy matching

mod english;
mod loader;
mod seed;
mod similarity;
mod store;

pub use english::EnglishLexicon;
pub use loader::{is_garbled_santali, read_csv, validate_row, CsvTable, LoadReport, RowVerdict};
pub use similarity::similarity;
pub use store::{DictionarySource, DictionaryStats, DictionaryStore, FuzzyMatch, SEARCH_LIMIT};
