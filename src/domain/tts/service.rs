use super::error::TtsServiceError;
use super::voice::SpeechRequest;
use crate::domain::deadline::with_deadline;
use crate::infrastructure::repositories::{AudioFileRepository, TtsRepository};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct SynthesizedAudio {
    pub path: PathBuf,
    pub size_bytes: usize,
}

pub struct TtsService {
    tts_repo: Arc<dyn TtsRepository>,
    audio_repo: Arc<AudioFileRepository>,
}

impl TtsService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, audio_repo: Arc<AudioFileRepository>) -> Self {
        Self {
            tts_repo,
            audio_repo,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech and store the audio
    ///
    /// This operation:
    /// - Validates the voice parameters locally
    /// - Calls the voice provider (bounded by `deadline` when set)
    /// - Writes the audio under a fresh unique file name
    async fn synthesize(
        &self,
        request: SpeechRequest,
        deadline: Option<Duration>,
    ) -> Result<SynthesizedAudio, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize(
        &self,
        request: SpeechRequest,
        deadline: Option<Duration>,
    ) -> Result<SynthesizedAudio, TtsServiceError> {
        tracing::info!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            stability = request.settings.stability,
            similarity_boost = request.settings.similarity_boost,
            text_length = request.text.len(),
            "TTS synthesis request"
        );

        // 1. Validate before spending a provider call
        request.validate()?;

        // 2. Call the provider
        let audio_data = with_deadline(deadline, self.tts_repo.synthesize(&request))
            .await
            .map_err(TtsServiceError::SynthesisFailed)?;

        if audio_data.is_empty() {
            return Err(TtsServiceError::SynthesisFailed(format!(
                "{} returned no audio",
                self.tts_repo.provider()
            )));
        }

        // 3. Persist
        let size_bytes = audio_data.len();
        let path = self
            .audio_repo
            .save(&audio_data)
            .await
            .map_err(TtsServiceError::Persistence)?;

        Ok(SynthesizedAudio { path, size_bytes })
    }
}
