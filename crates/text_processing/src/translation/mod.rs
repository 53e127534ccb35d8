//! Dictionary-driven translation
//!
//! Text is split into sentences and tokens, and every token position is
//! handed to an ordered list of resolver strategies:
//! - Phrase lookup (three, then two tokens)
//! - Exact word lookup
//! - Suffix-stripped stem lookup
//! - Fuzzy similarity
//! - Letter-level transliteration or pass-through as the last resort
//!
//! Each direction picks its own subset; see [`ResolutionPipeline`].

mod cache;
mod engine;
mod pipeline;
mod resolver;

pub use cache::TranslationCache;
pub use engine::TranslationEngine;
pub use pipeline::ResolutionPipeline;
pub use resolver::{
    round2, EnglishHindiLexicon, FuzzyResolver, HindiEnglishLexicon, Lexicon, PassThroughResolver,
    PhraseResolver, Provenance, PunctuationResolver, Resolution, Resolver, StemResolver,
    StoreLexicon, TransliterationResolver, TrimmedWordResolver, WordResolver, HINDI_SUFFIXES,
    TRANSLITERATION_NOTE,
};
