//! Unicode and whitespace normalization
//!
//! Dictionary keys and lookups go through [`normalize`], so a composed and a
//! decomposed spelling of the same word resolve to one entry.

use unicode_normalization::UnicodeNormalization;

/// NFC-normalize and collapse whitespace runs to single spaces
///
/// # Examples
/// ```
/// use santali_translator_text_processing::normalize::normalize;
/// assert_eq!(normalize("  मेरा \t नाम  "), "मेरा नाम");
/// ```
pub fn normalize(text: &str) -> String {
    let composed: String = text.nfc().collect();
    collapse_whitespace(&composed)
}

/// Collapse whitespace runs to single spaces and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Canonical decomposition (NFD)
pub fn to_nfd(text: &str) -> String {
    text.nfd().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a   b\n c "), "a b c");
        assert_eq!(collapse_whitespace("   "), "");
    }

    #[test]
    fn test_nukta_letters_stay_decomposed() {
        // U+0958 is a composition exclusion
        assert_eq!(normalize("\u{0958}"), "\u{0915}\u{093C}");
    }

    #[test]
    fn test_nfc_composes_latin() {
        let decomposed = "cafe\u{0301}";
        assert_eq!(normalize(decomposed), "caf\u{00E9}");
        assert_eq!(to_nfd("caf\u{00E9}"), decomposed);
    }
}
