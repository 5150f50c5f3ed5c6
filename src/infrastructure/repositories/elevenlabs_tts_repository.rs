use super::tts_repository::TtsRepository;
use crate::domain::tts::{SpeechRequest, TtsServiceError, VoiceSettings};
use async_trait::async_trait;
use serde::Serialize;

pub const DEFAULT_ELEVENLABS_BASE_URL: &str = "https://api.elevenlabs.io";

/// ElevenLabs implementation of TTS repository
pub struct ElevenLabsTtsRepository {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct TextToSpeechBody<'a> {
    text: &'a str,
    model_id: &'a str,
    voice_settings: VoiceSettings,
}

impl ElevenLabsTtsRepository {
    /// Fails with `SynthesisUnavailable` when no key is configured
    pub fn new(api_key: Option<String>, base_url: String) -> Result<Self, TtsServiceError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                TtsServiceError::SynthesisUnavailable(
                    "ELEVENLABS_API_KEY environment variable is not set".to_string(),
                )
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, voice_id: &str) -> String {
        format!("{}/v1/text-to-speech/{}", self.base_url, voice_id)
    }
}

#[async_trait]
impl TtsRepository for ElevenLabsTtsRepository {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            text_length = request.text.len(),
            text_preview = %request.text.chars().take(200).collect::<String>(),
            "Calling ElevenLabs TTS API"
        );

        let body = TextToSpeechBody {
            text: &request.text,
            model_id: &request.model_id,
            voice_settings: request.settings,
        };

        let response = self
            .client
            .post(self.endpoint(&request.voice_id))
            .header("xi-api-key", &self.api_key)
            .header(reqwest::header::ACCEPT, "audio/mpeg")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    voice_id = %request.voice_id,
                    "ElevenLabs TTS request failed"
                );
                format!("Error generating speech with Eleven Labs: {}", e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                voice_id = %request.voice_id,
                "ElevenLabs TTS API returned an error status"
            );
            return Err(format!(
                "Eleven Labs API error ({}): {}",
                status.as_u16(),
                detail
            ));
        }

        let audio_bytes = response
            .bytes()
            .await
            .map_err(|e| format!("Error reading Eleven Labs audio: {}", e))?
            .to_vec();

        tracing::info!(
            provider = "elevenlabs",
            voice_id = %request.voice_id,
            model_id = %request.model_id,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = request.text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(audio_bytes)
    }

    fn provider(&self) -> &'static str {
        "elevenlabs"
    }
}
