//! Collaborator traits consumed by the translator
//!
//! ```text
//! Speech Processing:
//!   - SpeechToText: Audio → Text transcription (feeds `translate`)
//!   - TextToSpeech: Text → Audio synthesis (speaks translated output)
//! ```
//!
//! Engines behind these traits live outside this workspace; the translator
//! only depends on the contracts.

mod speech;

pub use speech::{SpeechToText, SynthesizedAudio, TextToSpeech};
