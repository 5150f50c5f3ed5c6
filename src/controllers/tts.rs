use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    Json,
};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::tts::{
    SpeechRequest, SynthesizedAudio, TextToSpeechRequest, TextToSpeechResponse, TtsServiceApi,
};
use crate::error::{AppError, AppResult};

pub struct TtsController {
    tts_service: Arc<dyn TtsServiceApi>,
    provider_timeout: Option<Duration>,
}

impl TtsController {
    pub fn new(tts_service: Arc<dyn TtsServiceApi>, provider_timeout: Option<Duration>) -> Self {
        Self {
            tts_service,
            provider_timeout,
        }
    }

    /// POST /api/text_to_speech - Synthesize and report where the MP3 was written
    pub async fn text_to_speech(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TextToSpeechRequest>,
    ) -> AppResult<Json<TextToSpeechResponse>> {
        let audio = controller.synthesize(request).await?;

        Ok(Json(TextToSpeechResponse {
            audio_file_path: audio.path.display().to_string(),
            status: "success".to_string(),
        }))
    }

    /// POST /api/text_to_speech/download - Synthesize and return the MP3 itself
    pub async fn download(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TextToSpeechRequest>,
    ) -> AppResult<(StatusCode, HeaderMap, Body)> {
        let audio = controller.synthesize(request).await?;

        let bytes = tokio::fs::read(&audio.path).await.map_err(|e| {
            AppError::Internal(format!("Error reading generated audio: {}", e))
        })?;

        let file_name = audio
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "speech.mp3".to_string());

        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("audio/mpeg"));
        headers.insert(
            header::CONTENT_DISPOSITION,
            HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name))
                .map_err(|e| AppError::Internal(e.to_string()))?,
        );

        Ok((StatusCode::OK, headers, Body::from(bytes)))
    }

    async fn synthesize(&self, request: TextToSpeechRequest) -> AppResult<SynthesizedAudio> {
        let audio = self
            .tts_service
            .synthesize(SpeechRequest::from(request), self.provider_timeout)
            .await?;
        Ok(audio)
    }
}
