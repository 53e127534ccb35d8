//! CSV reading and row validation
//!
//! The source data is noisy: repeated header rows, single letters mixed in
//! with words, Latin-script or letter-by-letter transliteration debris in the
//! Santali column, and many duplicates. Rows failing validation are skipped,
//! never fatal.

use csv::{ReaderBuilder, StringRecord, Trim};
use indexmap::IndexMap;
use serde::Serialize;
use std::io::Read;

use crate::error::{DictionaryError, Result};
use crate::normalize::normalize;

/// Accepted header names for the Hindi column (case-insensitive)
const HINDI_COLUMNS: &[&str] = &["hindi"];

/// Accepted header names for the Santali column, in priority order
const SANTALI_COLUMNS: &[&str] = &["santali_olchiki", "santali"];

/// Counters describing one CSV load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows read (header excluded)
    pub rows_read: usize,
    /// Rows inserted into the table
    pub rows_loaded: usize,
    /// Rows failing validation
    pub rows_rejected: usize,
    /// Valid rows whose normalized Hindi form was already present
    pub duplicates_skipped: usize,
}

/// Outcome of validating a single row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowVerdict {
    Accept,
    EmptyField,
    HeaderRow,
    SingleCharacter,
    Garbled,
}

/// Validated, normalized, first-occurrence-wins pairs read from a CSV source
#[derive(Debug, Default)]
pub struct CsvTable {
    pub pairs: IndexMap<String, String>,
    pub report: LoadReport,
}

/// Read and validate a dictionary CSV
pub fn read_csv<R: Read>(reader: R) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let hindi_col = find_columns(&headers, HINDI_COLUMNS)
        .first()
        .copied()
        .ok_or(DictionaryError::MissingColumn("hindi"))?;
    let santali_cols = find_columns(&headers, SANTALI_COLUMNS);
    if santali_cols.is_empty() {
        return Err(DictionaryError::MissingColumn("santali"));
    }

    let mut table = CsvTable::default();
    for record in reader.records() {
        let record = record?;
        table.report.rows_read += 1;

        let hindi = record.get(hindi_col).unwrap_or("").trim();
        let santali = santali_cols
            .iter()
            .filter_map(|&col| record.get(col))
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or("");

        match validate_row(hindi, santali) {
            RowVerdict::Accept => {}
            verdict => {
                tracing::trace!(?verdict, hindi, santali, "Rejected dictionary row");
                table.report.rows_rejected += 1;
                continue;
            }
        }

        let hindi = normalize(hindi);
        if table.pairs.contains_key(&hindi) {
            table.report.duplicates_skipped += 1;
            continue;
        }
        table.pairs.insert(hindi, normalize(santali));
        table.report.rows_loaded += 1;
    }

    Ok(table)
}

/// Column indexes whose header matches one of `names`, in `names` order
fn find_columns(headers: &StringRecord, names: &[&str]) -> Vec<usize> {
    names
        .iter()
        .filter_map(|name| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        })
        .collect()
}

/// Apply the load-time validation rules to one raw row
pub fn validate_row(hindi: &str, santali: &str) -> RowVerdict {
    let (hindi, santali) = (hindi.trim(), santali.trim());
    if hindi.is_empty() || santali.is_empty() {
        RowVerdict::EmptyField
    } else if is_header_sentinel(hindi, santali) {
        RowVerdict::HeaderRow
    } else if hindi.chars().count() == 1 {
        RowVerdict::SingleCharacter
    } else if is_garbled_santali(santali) {
        RowVerdict::Garbled
    } else {
        RowVerdict::Accept
    }
}

/// A header line repeated inside the data
fn is_header_sentinel(hindi: &str, santali: &str) -> bool {
    let hindi = hindi.to_lowercase();
    let santali = santali.to_lowercase();
    matches!(hindi.as_str(), "hindi" | "h") || matches!(santali.as_str(), "santali" | "s")
}

/// Santali forms that are Latin text or letter-by-letter transliteration output
pub fn is_garbled_santali(santali: &str) -> bool {
    if santali.chars().any(|c| c.is_ascii_alphabetic()) {
        return true;
    }
    let tokens: Vec<&str> = santali.split_whitespace().collect();
    if tokens.len() > 4 {
        let single = tokens.iter().filter(|t| t.chars().count() == 1).count();
        if single * 2 > tokens.len() {
            return true;
        }
    }
    false
}
