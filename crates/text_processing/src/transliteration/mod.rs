//! Letter-level Devanagari → Ol Chiki transliteration
//!
//! Last-resort fallback for Hindi tokens no dictionary tier could resolve.
//! Applied one character at a time with no context; characters outside the
//! table pass through unchanged.

mod pronunciation;

pub use pronunciation::{is_ol_chiki, prepare_for_speech, pronounce};

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Devanagari glyph → Ol Chiki glyph(s)
const DEVANAGARI_TO_OL_CHIKI: &[(char, &str)] = &[
    // Independent vowels
    ('अ', "ᱚ"), ('आ', "ᱟ"), ('इ', "ᱤ"), ('ई', "ᱤ"), ('उ', "ᱩ"), ('ऊ', "ᱩ"),
    ('ए', "ᱮ"), ('ऐ', "ᱮ"), ('ओ', "ᱳ"), ('औ', "ᱳ"), ('ऋ', "ᱨᱤ"),
    // Consonants
    ('क', "ᱠ"), ('ख', "ᱠ"), ('ग', "ᱜ"), ('घ', "ᱜ"), ('ङ', "ᱝ"),
    ('च', "ᱪ"), ('छ', "ᱪ"), ('ज', "ᱡ"), ('झ', "ᱡ"), ('ञ', "ᱧ"),
    ('ट', "ᱴ"), ('ठ', "ᱴ"), ('ड', "ᱫ"), ('ढ', "ᱫ"), ('ण', "ᱱ"),
    ('त', "ᱛ"), ('थ', "ᱛ"), ('द', "ᱰ"), ('ध', "ᱰ"), ('न', "ᱱ"),
    ('प', "ᱯ"), ('फ', "ᱯ"), ('ब', "ᱵ"), ('भ', "ᱵ"), ('म', "ᱢ"),
    ('य', "ᱭ"), ('र', "ᱨ"), ('ल', "ᱞ"), ('व', "ᱣ"),
    ('श', "ᱥ"), ('ष', "ᱥ"), ('स', "ᱥ"), ('ह', "ᱦ"), ('ळ', "ᱞ"),
    // Digits
    ('०', "᱐"), ('१', "᱑"), ('२', "᱒"), ('३', "᱓"), ('४', "᱔"),
    ('५', "᱕"), ('६', "᱖"), ('७', "᱗"), ('८', "᱘"), ('९', "᱙"),
    // Vowel signs
    ('ा', "ᱟ"), ('ि', "ᱤ"), ('ी', "ᱤ"), ('ु', "ᱩ"), ('ू', "ᱩ"),
    ('े', "ᱮ"), ('ै', "ᱮ"), ('ो', "ᱳ"), ('ौ', "ᱳ"), ('ृ', "ᱨᱤ"),
    // Anusvara, visarga, chandrabindu, virama
    ('ं', "ᱝ"), ('ः', "ᱦ"), ('ँ', "ᱝ"), ('्', ""),
];

static LETTER_MAP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| DEVANAGARI_TO_OL_CHIKI.iter().copied().collect());

/// Ol Chiki rendering of a single Devanagari character
pub fn map_char(c: char) -> Option<&'static str> {
    LETTER_MAP.get(&c).copied()
}

/// Transliterate `text` character by character
///
/// Never returns an empty string for non-empty input: if every character
/// maps to nothing (a lone virama), the input is returned as-is.
///
/// # Examples
/// ```
/// use santali_translator_text_processing::transliteration::transliterate;
/// assert_eq!(transliterate("कमल"), "ᱠᱢᱞ");
/// assert_eq!(transliterate("ऋषि"), "ᱨᱤᱥᱤ");
/// ```
pub fn transliterate(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match map_char(c) {
            Some(mapped) => out.push_str(mapped),
            None => out.push(c),
        }
    }
    if out.is_empty() {
        text.to_string()
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let mut seen = HashSet::new();
        for (c, _) in DEVANAGARI_TO_OL_CHIKI {
            assert!(seen.insert(*c), "duplicate transliteration key {:?}", c);
        }
        assert_eq!(LETTER_MAP.len(), DEVANAGARI_TO_OL_CHIKI.len());
    }

    #[test]
    fn test_conjunct_uses_virama() {
        // क्ष is क + ् + ष
        assert_eq!(transliterate("क्ष"), "ᱠᱥ");
    }

    #[test]
    fn test_digits() {
        assert_eq!(transliterate("२०२४"), "᱒᱐᱒᱔");
    }

    #[test]
    fn test_unmapped_pass_through() {
        assert_eq!(transliterate("क़"), "ᱠ़");
        assert_eq!(transliterate("abc"), "abc");
    }

    #[test]
    fn test_never_empty() {
        assert_eq!(transliterate("्"), "्");
        for word in ["अनजान", "ज़िंदगी", "क्", "ॐ"] {
            assert!(!transliterate(word).is_empty(), "{}", word);
        }
    }
}
