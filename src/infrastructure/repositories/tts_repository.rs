use crate::domain::tts::SpeechRequest;
use async_trait::async_trait;

/// Repository for TTS synthesis operations.
/// Abstracts the underlying voice provider (ElevenLabs today).
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// Synthesize the request's text with its voice and settings
    ///
    /// Returns audio data ready for playback (MP3 format)
    ///
    /// # Errors
    /// Returns error if synthesis fails or provider rejects the request
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String>;

    fn provider(&self) -> &'static str;
}
