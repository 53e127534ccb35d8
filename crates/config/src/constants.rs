//! Centralized constants for the translator
//!
//! Single source of truth for default values shared by the config layer,
//! the dictionary store and the resolution pipeline.

/// Dictionary source locations
pub mod dictionary {
    /// Primary consolidated dataset
    pub const DEFAULT_PATH: &str = "data/hindi_santali_final.csv";

    /// Older datasets, tried in order when the primary path is missing
    pub const FALLBACK_PATHS: &[&str] = &[
        "data/hindi_santali_master_v2.csv",
        "data/hindi_santali_master.csv",
        "data/hindi_santali_enhanced.csv",
        "data/hindi_santali_dataset_final.csv",
        "data/hindi_santali_dataset.csv",
    ];

    /// Maximum number of rows returned by substring search
    pub const SEARCH_LIMIT: usize = 20;
}

/// Resolution tier thresholds and confidences
pub mod resolution {
    /// Similarity a fuzzy candidate must exceed to be considered (hi→sat)
    pub const FUZZY_FLOOR: f64 = 0.50;

    /// Similarity a fuzzy candidate needs to be accepted (hi→sat)
    pub const FUZZY_ACCEPT: f64 = 0.75;

    /// Similarity floor for Santali→Hindi fuzzy matches
    pub const REVERSE_FUZZY_FLOOR: f64 = 0.65;

    /// Confidence reported for stem matches
    pub const STEM_CONFIDENCE: f64 = 0.85;

    /// Confidence reported for letter transliteration
    pub const TRANSLITERATION_CONFIDENCE: f64 = 0.3;
}

/// Whole-text result cache
pub mod cache {
    pub const DEFAULT_CAPACITY: usize = 10_000;
}

/// Environment variable conventions
pub mod env {
    /// Prefix for setting overrides, e.g. `SANTALI_TRANSLATOR__CACHE__CAPACITY`
    pub const PREFIX: &str = "SANTALI_TRANSLATOR";
    pub const SEPARATOR: &str = "__";

    /// Selects `config/{env}` on top of `config/default`
    pub const PROFILE_VAR: &str = "SANTALI_TRANSLATOR_ENV";
}

/// Log levels accepted by `observability.log_level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];
