//! sahay-voice
//!
//! Trait seams for the device collaborators: speech-to-text capture,
//! text-to-speech synthesis, and haptic feedback. The core treats all of
//! these as external — a capture result is equivalent to typed input,
//! synthesis is fire-and-forget, and haptics are a hint the device may
//! ignore. This crate ships only null/unsupported implementations; a real
//! frontend supplies its own.

pub mod error;
pub mod haptics;

pub use error::VoiceError;
pub use haptics::{HapticEngine, HapticIntensity, NullHaptics};

use sahay_core::models::VoiceKind;
use tracing::debug;

/// Speech-to-text collaborator. Resolves to a transcript, or to an error
/// the caller surfaces inline and does not retry.
pub trait VoiceCapture {
    fn capture(&self) -> impl Future<Output = Result<String, VoiceError>> + Send;
}

/// The shipped default: voice input is not available on this device.
pub struct UnsupportedCapture;

impl VoiceCapture for UnsupportedCapture {
    async fn capture(&self) -> Result<String, VoiceError> {
        Err(VoiceError::Unsupported)
    }
}

/// Fixed-transcript capture for tests and scripted runs.
pub struct ScriptedCapture {
    pub transcript: String,
}

impl VoiceCapture for ScriptedCapture {
    async fn capture(&self) -> Result<String, VoiceError> {
        Ok(self.transcript.clone())
    }
}

/// Text-to-speech collaborator. Fire-and-forget: no completion callback
/// reaches the core, and failures stay inside the implementation.
pub trait VoiceSynthesis {
    fn speak(&self, text: &str, voice: VoiceKind);
}

/// Synthesis sink that only logs. Used when no audio backend exists.
pub struct NullSynthesis;

impl VoiceSynthesis for NullSynthesis {
    fn speak(&self, text: &str, voice: VoiceKind) {
        debug!(?voice, chars = text.len(), "speech synthesis unavailable, dropping utterance");
    }
}
