//! Speech-in, speech-out translation
//!
//! Wraps a [`TranslationEngine`] with a speech-to-text collaborator on the
//! way in and a text-to-speech collaborator on the way out.

use std::sync::Arc;

use santali_translator_core::{
    Error, Language, Result, SpeechToText, SynthesizedAudio, TextToSpeech, TranslationResult,
};

use crate::translation::TranslationEngine;
use crate::transliteration::prepare_for_speech;

/// Voice used when a TTS engine has no Santali voice
const SANTALI_FALLBACK_VOICE: Language = Language::Hindi;

pub struct SpeechTranslator<S: SpeechToText, T: TextToSpeech> {
    engine: Arc<TranslationEngine>,
    stt: S,
    tts: T,
}

impl<S: SpeechToText, T: TextToSpeech> SpeechTranslator<S, T> {
    pub fn new(engine: Arc<TranslationEngine>, stt: S, tts: T) -> Self {
        Self { engine, stt, tts }
    }

    pub fn engine(&self) -> &TranslationEngine {
        &self.engine
    }

    /// Transcribe `audio` and translate the transcript
    ///
    /// A transcription failure is returned as an unsuccessful result.
    pub async fn translate_audio(&self, audio: &[u8], source: &str, target: &str) -> TranslationResult {
        let hint = Language::from_str_loose(source).unwrap_or_default();
        match self.stt.transcribe(audio, hint).await {
            Ok(transcript) => {
                tracing::debug!(model = self.stt.model_name(), chars = transcript.chars().count(), "Transcribed");
                self.engine.translate(&transcript, source, target)
            }
            Err(e) => {
                tracing::warn!(model = self.stt.model_name(), error = %e, "Transcription failed");
                TranslationResult::failure("", e)
            }
        }
    }

    /// Synthesize the translated text of `result`
    ///
    /// Ol Chiki output is spelled out phonetically first. Santali falls back
    /// to the Hindi voice when the engine lacks one.
    pub async fn speak(&self, result: &TranslationResult) -> Result<SynthesizedAudio> {
        if !result.success {
            return Err(Error::Synthesis(
                result
                    .error
                    .clone()
                    .unwrap_or_else(|| "Translation failed".to_string()),
            ));
        }

        let text = prepare_for_speech(&result.translated_text);
        if text.trim().is_empty() {
            return Err(Error::Synthesis("Nothing to synthesize".to_string()));
        }

        let language = self.voice_for(result.target_language.unwrap_or(Language::Santali));
        tracing::debug!(model = self.tts.model_name(), %language, "Synthesizing");
        self.tts.synthesize(&text, language).await
    }

    fn voice_for(&self, language: Language) -> Language {
        if language == Language::Santali && !self.tts.supports_language(language) {
            SANTALI_FALLBACK_VOICE
        } else {
            language
        }
    }
}
