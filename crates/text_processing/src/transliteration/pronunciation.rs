//! Ol Chiki → phonetic Latin spelling
//!
//! Speech engines rarely ship an Ol Chiki voice. Spelling Santali output out
//! phonetically lets a Hindi or English voice read it aloud.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use santali_translator_core::Script;

const OL_CHIKI_PHONETIC: &[(char, &str)] = &[
    // Vowels
    ('ᱚ', "oh"), ('ᱟ', "ah"), ('ᱤ', "ee"), ('ᱩ', "oo"), ('ᱮ', "ay"), ('ᱳ', "o"),
    // Consonants
    ('ᱦ', "ha"), ('ᱰ', "do"), ('ᱠ', "ka"), ('ᱜ', "ga"), ('ᱝ', "nga"), ('ᱞ', "la"),
    ('ᱢ', "ma"), ('ᱣ', "wa"), ('ᱨ', "ra"), ('ᱪ', "cha"), ('ᱫ', "da"), ('ᱬ', "dha"),
    ('ᱭ', "ya"), ('ᱱ', "na"), ('ᱥ', "sa"), ('ᱧ', "nya"), ('ᱲ', "rra"), ('ᱴ', "ta"),
    ('ᱵ', "ba"), ('ᱶ', "va"), ('ᱛ', "ta"), ('ᱡ', "ja"), ('ᱯ', "pa"),
    // Modifiers
    ('ᱷ', "h"), ('ᱸ', "n"), ('ᱹ', ""), ('ᱺ', ""),
    // Digits
    ('᱐', "zero"), ('᱑', "one"), ('᱒', "two"), ('᱓', "three"), ('᱔', "four"),
    ('᱕', "five"), ('᱖', "six"), ('᱗', "seven"), ('᱘', "eight"), ('᱙', "nine"),
];

/// Danda and Ol Chiki mucaad: pauses, not sounds
const SILENT_MARKS: &[char] = &['।', '᱾', '᱿'];

static PHONETIC_MAP: Lazy<HashMap<char, &'static str>> =
    Lazy::new(|| OL_CHIKI_PHONETIC.iter().copied().collect());

/// Spell Ol Chiki text phonetically
///
/// Spaces are kept, sentence marks are dropped, anything else unmapped
/// passes through.
pub fn pronounce(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if let Some(spelling) = PHONETIC_MAP.get(&c) {
            out.push_str(spelling);
        } else if !SILENT_MARKS.contains(&c) {
            out.push(c);
        }
    }
    out
}

/// Whether `text` contains any Ol Chiki character
pub fn is_ol_chiki(text: &str) -> bool {
    Script::OlChiki.is_present_in(text)
}

/// Text to hand a speech engine: Ol Chiki is spelled out, the rest is unchanged
pub fn prepare_for_speech(text: &str) -> String {
    if is_ol_chiki(text) {
        pronounce(text)
    } else {
        text.to_string()
    }
}
