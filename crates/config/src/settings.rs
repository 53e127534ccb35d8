//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::constants::{cache, dictionary, env, resolution, LOG_LEVELS};
use crate::ConfigError;

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Dictionary source configuration
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Resolution pipeline thresholds
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Whole-text result cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Where the Hindi-Santali CSV lives
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Primary dataset path
    #[serde(default = "default_dictionary_path")]
    pub path: PathBuf,

    /// Datasets tried in order when `path` does not exist
    #[serde(default = "default_fallback_paths")]
    pub fallback_paths: Vec<PathBuf>,

    /// Apply the curated override tables after loading
    #[serde(default = "default_true")]
    pub apply_curated: bool,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from(dictionary::DEFAULT_PATH)
}

fn default_fallback_paths() -> Vec<PathBuf> {
    dictionary::FALLBACK_PATHS.iter().map(PathBuf::from).collect()
}

fn default_true() -> bool {
    true
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_dictionary_path(),
            fallback_paths: default_fallback_paths(),
            apply_curated: true,
        }
    }
}

impl DictionaryConfig {
    /// Candidate paths in priority order
    pub fn candidates(&self) -> impl Iterator<Item = &Path> {
        std::iter::once(self.path.as_path()).chain(self.fallback_paths.iter().map(PathBuf::as_path))
    }

    /// First candidate that exists on disk, or the primary path when none do
    ///
    /// Returning the primary path lets the loader report it and fall back to
    /// the built-in seed table.
    pub fn resolve_path(&self) -> PathBuf {
        self.candidates()
            .find(|p| p.is_file())
            .unwrap_or(self.path.as_path())
            .to_path_buf()
    }
}

/// Thresholds and per-tier confidences for the resolution pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ResolutionConfig {
    #[serde(default = "default_fuzzy_floor")]
    pub fuzzy_floor: f64,

    #[serde(default = "default_fuzzy_accept")]
    pub fuzzy_accept: f64,

    #[serde(default = "default_reverse_fuzzy_floor")]
    pub reverse_fuzzy_floor: f64,

    #[serde(default = "default_stem_confidence")]
    pub stem_confidence: f64,

    #[serde(default = "default_transliteration_confidence")]
    pub transliteration_confidence: f64,
}

fn default_fuzzy_floor() -> f64 {
    resolution::FUZZY_FLOOR
}

fn default_fuzzy_accept() -> f64 {
    resolution::FUZZY_ACCEPT
}

fn default_reverse_fuzzy_floor() -> f64 {
    resolution::REVERSE_FUZZY_FLOOR
}

fn default_stem_confidence() -> f64 {
    resolution::STEM_CONFIDENCE
}

fn default_transliteration_confidence() -> f64 {
    resolution::TRANSLITERATION_CONFIDENCE
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            fuzzy_floor: default_fuzzy_floor(),
            fuzzy_accept: default_fuzzy_accept(),
            reverse_fuzzy_floor: default_reverse_fuzzy_floor(),
            stem_confidence: default_stem_confidence(),
            transliteration_confidence: default_transliteration_confidence(),
        }
    }
}

/// Whole-text cache configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum cached results; 0 disables caching
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

fn default_cache_capacity() -> usize {
    cache::DEFAULT_CAPACITY
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: default_cache_capacity(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Enable JSON logging
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    /// Create default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_dictionary()?;
        self.validate_resolution()?;
        self.validate_observability()?;
        Ok(())
    }

    fn validate_dictionary(&self) -> Result<(), ConfigError> {
        if self.dictionary.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "dictionary.path".to_string(),
                message: "Path must not be empty".to_string(),
            });
        }
        Ok(())
    }

    fn validate_resolution(&self) -> Result<(), ConfigError> {
        let r = &self.resolution;
        let unit_fields = [
            ("resolution.fuzzy_floor", r.fuzzy_floor),
            ("resolution.fuzzy_accept", r.fuzzy_accept),
            ("resolution.reverse_fuzzy_floor", r.reverse_fuzzy_floor),
            ("resolution.stem_confidence", r.stem_confidence),
            ("resolution.transliteration_confidence", r.transliteration_confidence),
        ];
        for (field, value) in unit_fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    message: format!("Must be between 0.0 and 1.0, got {}", value),
                });
            }
        }

        if r.fuzzy_accept < r.fuzzy_floor {
            return Err(ConfigError::InvalidValue {
                field: "resolution.fuzzy_accept".to_string(),
                message: format!(
                    "Must not be below fuzzy_floor ({}), got {}",
                    r.fuzzy_floor, r.fuzzy_accept
                ),
            });
        }
        Ok(())
    }

    fn validate_observability(&self) -> Result<(), ConfigError> {
        let level = self.observability.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "observability.log_level".to_string(),
                message: format!(
                    "Unknown level '{}', expected one of {:?}",
                    self.observability.log_level, LOG_LEVELS
                ),
            });
        }
        Ok(())
    }
}

/// Load settings from `config/` and the environment
///
/// Priority: env vars > config/{env} > config/default > defaults
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    load_settings_from(Path::new("config"), env)
}

/// Load settings with `config_dir` as the file root
pub fn load_settings_from(config_dir: &Path, env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    let default_file = config_dir.join("default");
    builder = builder.add_source(File::with_name(&default_file.to_string_lossy()).required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        let env_file = config_dir.join(env_name);
        builder = builder.add_source(File::with_name(&env_file.to_string_lossy()).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix(env::PREFIX)
            .separator(env::SEPARATOR)
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    settings.validate()?;

    tracing::debug!(
        dictionary = %settings.dictionary.path.display(),
        cache_capacity = settings.cache.capacity,
        "Settings loaded"
    );

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.cache.capacity, 10_000);
        assert_eq!(settings.resolution.fuzzy_floor, 0.50);
        assert_eq!(settings.resolution.fuzzy_accept, 0.75);
        assert_eq!(settings.observability.log_level, "info");
        assert!(settings.dictionary.apply_curated);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_resolution_validation() {
        let mut settings = Settings::default();
        settings.resolution.fuzzy_floor = 1.5;
        assert!(settings.validate().is_err());

        settings.resolution.fuzzy_floor = 0.8;
        settings.resolution.fuzzy_accept = 0.7;
        let err = settings.validate().unwrap_err();
        assert!(err.to_string().contains("resolution.fuzzy_accept"));

        settings.resolution.fuzzy_accept = 0.9;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_log_level_validation() {
        let mut settings = Settings::default();
        settings.observability.log_level = "WARN".to_string();
        assert!(settings.validate().is_ok());

        settings.observability.log_level = "loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_resolve_path_prefers_existing_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let fallback = dir.path().join("older.csv");
        fs::write(&fallback, "hindi,santali\n").unwrap();

        let config = DictionaryConfig {
            path: dir.path().join("missing.csv"),
            fallback_paths: vec![dir.path().join("also-missing.csv"), fallback.clone()],
            apply_curated: true,
        };
        assert_eq!(config.resolve_path(), fallback);
    }

    #[test]
    fn test_resolve_path_defaults_to_primary() {
        let dir = tempfile::tempdir().unwrap();
        let config = DictionaryConfig {
            path: dir.path().join("missing.csv"),
            fallback_paths: Vec::new(),
            apply_curated: false,
        };
        assert_eq!(config.resolve_path(), dir.path().join("missing.csv"));
    }

    #[test]
    fn test_load_settings_from_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[cache]\ncapacity = 42\n\n[resolution]\nfuzzy_accept = 0.8\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("staging.toml"),
            "[observability]\nlog_json = true\n",
        )
        .unwrap();

        let settings = load_settings_from(dir.path(), Some("staging")).unwrap();
        assert_eq!(settings.cache.capacity, 42);
        assert_eq!(settings.resolution.fuzzy_accept, 0.8);
        assert_eq!(settings.resolution.fuzzy_floor, 0.50);
        assert!(settings.observability.log_json);
    }

    #[test]
    fn test_load_settings_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("default.toml"),
            "[resolution]\nstem_confidence = 2.0\n",
        )
        .unwrap();

        let err = load_settings_from(dir.path(), None).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
