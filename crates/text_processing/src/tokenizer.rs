//! Sentence and word segmentation

/// Characters that end a sentence
pub const SENTENCE_TERMINATORS: &[char] = &['।', '॥', '.', '!', '?'];

/// Clause and sentence punctuation copied through the pipeline verbatim
pub const PASS_THROUGH_PUNCTUATION: &[&str] = &["।", "॥", ".", ",", "!", "?", "-", ":", ";"];

/// Collapse whitespace runs to single spaces and trim
pub fn clean_text(text: &str) -> String {
    crate::normalize::collapse_whitespace(text)
}

/// Split on runs of sentence terminators, trim pieces, drop empty ones
///
/// # Examples
/// ```
/// use santali_translator_text_processing::tokenizer::tokenize_sentences;
/// assert_eq!(tokenize_sentences("नमस्ते। आप कैसे हैं??"), vec!["नमस्ते", "आप कैसे हैं"]);
/// ```
pub fn tokenize_sentences(text: &str) -> Vec<&str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split on whitespace runs; punctuation stays attached
pub fn tokenize_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Whether a token is pass-through punctuation
pub fn is_punctuation(token: &str) -> bool {
    PASS_THROUGH_PUNCTUATION.contains(&token)
}
