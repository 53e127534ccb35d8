//! Speech processing traits

use crate::{Language, Result};
use async_trait::async_trait;

/// Encoded audio produced by a text-to-speech engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    /// e.g. `audio/mpeg`, `audio/wav`
    pub mime_type: String,
}

impl SynthesizedAudio {
    pub fn new(bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            bytes,
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Speech-to-Text interface
///
/// # Example
///
/// ```ignore
/// let stt: Box<dyn SpeechToText> = Box::new(WhisperStt::new(config));
/// let text = stt.transcribe(&wav_bytes, Language::Hindi).await?;
/// ```
#[async_trait]
pub trait SpeechToText: Send + Sync + 'static {
    /// Transcribe encoded audio
    ///
    /// # Arguments
    /// * `audio` - Encoded audio bytes
    /// * `language_hint` - Language the speaker is expected to use
    async fn transcribe(&self, audio: &[u8], language_hint: Language) -> Result<String>;

    /// Get model name for logging
    fn model_name(&self) -> &str;
}

/// Text-to-Speech interface
///
/// # Example
///
/// ```ignore
/// let tts: Box<dyn TextToSpeech> = Box::new(GttsClient::new());
/// let audio = tts.synthesize("नमस्ते", Language::Hindi).await?;
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync + 'static {
    /// Synthesize text to encoded audio
    async fn synthesize(&self, text: &str, language: Language) -> Result<SynthesizedAudio>;

    /// Languages this engine has a voice for
    fn supported_languages(&self) -> &[Language];

    /// Get model name for logging
    fn model_name(&self) -> &str;

    /// Check if a specific language is supported
    fn supports_language(&self, lang: Language) -> bool {
        self.supported_languages().contains(&lang)
    }
}
